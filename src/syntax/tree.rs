//! Arena syntax tree.

use std::fmt;

use smol_str::SmolStr;

use crate::base::{TextRange, TextSize};

use super::NodeKind;

/// Index of a node inside its [`SyntaxTree`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct NodeData {
    kind: NodeKind,
    range: TextRange,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// An immutable syntax tree for one source file.
///
/// Nodes live in a single arena owned by the tree; everything else refers to
/// them by [`NodeId`]. Ranges are offsets in the global position space of
/// the [`FileSet`](super::FileSet) the file belongs to.
///
/// Accessors panic when given a `NodeId` from a different tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyntaxTree {
    nodes: Vec<NodeData>,
    root: NodeId,
}

impl SyntaxTree {
    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn kind(&self, node: NodeId) -> &NodeKind {
        &self.data(node).kind
    }

    pub fn range(&self, node: NodeId) -> TextRange {
        self.data(node).range
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.data(node).parent
    }

    /// Children ordered by start offset.
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.data(node).children
    }

    /// The node and its ancestors, innermost first, ending at the root.
    pub fn ancestors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(Some(node), |&n| self.parent(n))
    }

    /// All nodes in allocation order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len() as u32).map(NodeId)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn data(&self, node: NodeId) -> &NodeData {
        &self.nodes[node.0 as usize]
    }
}

/// Bottom-up builder for [`SyntaxTree`].
///
/// Children must be built before their parent; [`TreeBuilder::node`] links
/// them and keeps them sorted by position.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    nodes: Vec<NodeData>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node(
        &mut self,
        kind: NodeKind,
        range: TextRange,
        children: impl IntoIterator<Item = NodeId>,
    ) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        let mut children: Vec<NodeId> = children.into_iter().collect();
        children.sort_by_key(|&child| self.nodes[child.0 as usize].range.start());
        for &child in &children {
            let data = &mut self.nodes[child.0 as usize];
            debug_assert!(data.parent.is_none(), "{:?} already has a parent", child);
            data.parent = Some(id);
        }
        self.nodes.push(NodeData {
            kind,
            range,
            parent: None,
            children,
        });
        id
    }

    pub fn leaf(&mut self, kind: NodeKind, range: TextRange) -> NodeId {
        self.node(kind, range, [])
    }

    /// Identifier starting at `start` and spanning its own text.
    pub fn ident(&mut self, name: &str, start: TextSize) -> NodeId {
        let range = TextRange::at(start, TextSize::of(name));
        self.leaf(NodeKind::Ident(SmolStr::new(name)), range)
    }

    /// Range covering the given nodes, which must be non-empty.
    pub fn cover(&self, nodes: &[NodeId]) -> TextRange {
        nodes
            .iter()
            .map(|&n| self.nodes[n.0 as usize].range)
            .reduce(TextRange::cover)
            .unwrap_or_default()
    }

    pub fn finish(self, root: NodeId) -> SyntaxTree {
        debug_assert!(
            self.nodes[root.0 as usize].parent.is_none(),
            "root must not have a parent"
        );
        SyntaxTree {
            nodes: self.nodes,
            root,
        }
    }
}

//! Ancestor paths through a syntax tree.

use crate::base::{TextRange, TextSize};

use super::{NodeId, NodeKind, SyntaxFile, SyntaxTree};

/// A chain of nodes from some node up to the file root.
///
/// Index `0` is the innermost node; the last index is the root. Paths
/// borrow the file they point into and are meant to be short-lived.
#[derive(Clone, Debug)]
pub struct SyntaxPath<'a> {
    file: &'a SyntaxFile,
    /// Stored root first so descending and ascending are push/pop.
    nodes: Vec<NodeId>,
}

impl<'a> SyntaxPath<'a> {
    /// The path from `node` up to the root.
    pub fn from_node(file: &'a SyntaxFile, node: NodeId) -> Self {
        let mut nodes: Vec<NodeId> = file.tree().ancestors(node).collect();
        nodes.reverse();
        Self { file, nodes }
    }

    pub(crate) fn from_root_first(file: &'a SyntaxFile, nodes: Vec<NodeId>) -> Self {
        Self { file, nodes }
    }

    pub fn file(&self) -> &'a SyntaxFile {
        self.file
    }

    pub fn tree(&self) -> &'a SyntaxTree {
        self.file.tree()
    }

    pub fn innermost(&self) -> Option<NodeId> {
        self.nodes.last().copied()
    }

    /// The `i`-th node counting outwards from the innermost one.
    pub fn get(&self, i: usize) -> Option<NodeId> {
        self.nodes.len().checked_sub(i + 1).map(|idx| self.nodes[idx])
    }

    pub fn kind(&self, i: usize) -> Option<&'a NodeKind> {
        let tree = self.tree();
        self.get(i).map(|node| tree.kind(node))
    }

    /// Nodes innermost first.
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().rev().copied()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(crate) fn descend(&mut self, child: NodeId) {
        self.nodes.push(child);
    }

    pub(crate) fn ascend(&mut self, levels: usize) {
        let keep = self.nodes.len().saturating_sub(levels);
        self.nodes.truncate(keep);
    }
}

impl PartialEq for SyntaxPath<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.file.id() == other.file.id() && self.nodes == other.nodes
    }
}

impl Eq for SyntaxPath<'_> {}

/// Find the deepest node of `tree` enclosing the interval `[start, end)`.
///
/// Returns the path root first, and whether the innermost node spans the
/// interval exactly. An empty interval is treated as one byte wide. An
/// interval that misses the root entirely yields just the root, inexact.
pub fn path_enclosing_interval(
    tree: &SyntaxTree,
    start: TextSize,
    end: TextSize,
) -> (Vec<NodeId>, bool) {
    let (mut start, mut end) = if start <= end { (start, end) } else { (end, start) };
    if start == end {
        end = start + TextSize::from(1);
    }

    let root = tree.root();
    let root_range = tree.range(root);
    if !(start < root_range.end() && end > root_range.start()) {
        return (vec![root], false);
    }

    let mut path = vec![root];
    let mut node = root;
    loop {
        let range = tree.range(node);
        start = start.max(range.start());
        end = end.min(range.end());

        match enclosing_child(tree, node, TextRange::new(start, end)) {
            Some(child) => {
                path.push(child);
                node = child;
            }
            None => {
                let exact = start == range.start() && end == range.end();
                return (path, exact);
            }
        }
    }
}

/// The sole child containing `interval`, if any.
fn enclosing_child(tree: &SyntaxTree, node: NodeId, interval: TextRange) -> Option<NodeId> {
    for &child in tree.children(node) {
        let child_range = tree.range(child);
        if child_range.contains_range(interval) {
            return Some(child);
        }
        // The interval straddles this child and something after it.
        if interval.start() < child_range.end() && interval.end() > child_range.end() {
            return None;
        }
    }
    None
}

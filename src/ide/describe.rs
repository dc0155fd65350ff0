//! Describe: what is under the cursor.

use crate::base::{FileId, TextRange, TextSize};
use crate::hir::{NavError, NavResult, NodeCategory, Package, classify, enclosing_path};
use crate::syntax::NodeId;

/// The interesting node for a selection and what it is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Description {
    pub file: FileId,
    pub node: NodeId,
    /// Kind name of the node, e.g. `Ident` or `StructType`.
    pub kind: &'static str,
    pub range: TextRange,
    pub category: NodeCategory,
    /// Whether the selection matched a node exactly, before classification
    /// moved to a more interesting one.
    pub exact: bool,
}

/// Describe the selection `[start, end)` within `package`.
pub fn describe(package: &Package, start: TextSize, end: TextSize) -> NavResult<Description> {
    let (path, exact) = enclosing_path(package, start, end)?;
    let (path, category) = classify(path, package.type_info())?;
    let node = path.innermost().ok_or(NavError::NotFound { offset: start })?;
    let tree = path.tree();

    Ok(Description {
        file: path.file().id(),
        node,
        kind: tree.kind(node).name(),
        range: tree.range(node),
        category,
        exact,
    })
}

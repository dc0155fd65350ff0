//! Identifiers for packages and syntax nodes.

use std::borrow::Borrow;
use std::fmt;

use smol_str::SmolStr;

use crate::base::FileId;
use crate::syntax::NodeId;

/// A globally unique reference to a syntax node.
///
/// Combines the file the node lives in with its index in that file's tree.
/// This is the key the semantic tables use.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct NodeRef {
    pub file: FileId,
    pub node: NodeId,
}

impl NodeRef {
    #[inline]
    pub const fn new(file: FileId, node: NodeId) -> Self {
        Self { file, node }
    }
}

impl fmt::Debug for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeRef({:?}:{})", self.file, self.node.index())
    }
}

/// The import path of a package; the key of the global cache.
#[derive(Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct ImportPath(SmolStr);

impl ImportPath {
    pub fn new(path: impl AsRef<str>) -> Self {
        Self(SmolStr::new(path))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ImportPath {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ImportPath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl fmt::Debug for ImportPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0.as_str())
    }
}

impl fmt::Display for ImportPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque build identifier of a package (unique per build configuration,
/// unlike the import path which may be shared by test variants).
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct PackageId(SmolStr);

impl PackageId {
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(SmolStr::new(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PackageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

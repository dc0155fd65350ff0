//! File identifiers for source files of a package.

use std::fmt;

/// Identifier of one source file within a [`FileSet`](crate::syntax::FileSet).
///
/// Ids are handed out sequentially and never reused, so a `FileId` together
/// with a [`NodeId`](crate::syntax::NodeId) names a syntax node uniquely
/// across every package in the cache.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct FileId(u32);

impl FileId {
    #[inline]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw index.
    #[inline]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FileId({})", self.0)
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "file#{}", self.0)
    }
}

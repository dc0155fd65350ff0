//! Source files and the shared position space.

use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::RwLock;

use crate::base::{FileId, LineCol, LineIndex, TextRange, TextSize};

use super::SyntaxTree;

/// A parsed source file: its tree plus the position index of its text.
///
/// Cloning is cheap; the tree and the index are shared. A file is
/// *position-invalid* when the front end could not assign it a position
/// (for instance after a fatal parse error). Such files are kept for
/// completeness but never match an offset.
#[derive(Clone, Debug)]
pub struct SyntaxFile {
    id: FileId,
    path: Arc<str>,
    base: Option<TextSize>,
    line_index: Arc<LineIndex>,
    tree: Arc<SyntaxTree>,
}

impl SyntaxFile {
    pub fn new(
        id: FileId,
        path: impl Into<Arc<str>>,
        base: TextSize,
        line_index: LineIndex,
        tree: SyntaxTree,
    ) -> Self {
        Self {
            id,
            path: path.into(),
            base: Some(base),
            line_index: Arc::new(line_index),
            tree: Arc::new(tree),
        }
    }

    /// A file without position information.
    pub fn position_invalid(id: FileId, path: impl Into<Arc<str>>, tree: SyntaxTree) -> Self {
        Self {
            id,
            path: path.into(),
            base: None,
            line_index: Arc::new(LineIndex::new("")),
            tree: Arc::new(tree),
        }
    }

    pub fn id(&self) -> FileId {
        self.id
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn tree(&self) -> &SyntaxTree {
        &self.tree
    }

    pub fn is_position_valid(&self) -> bool {
        self.base.is_some()
    }

    /// The file's extent in the global position space, end inclusive of EOF.
    pub fn span(&self) -> Option<TextRange> {
        self.base
            .map(|base| TextRange::at(base, self.line_index.text_len()))
    }

    /// Whether `offset` lies in this file; the EOF offset counts as inside.
    pub fn contains_offset(&self, offset: TextSize) -> bool {
        self.span()
            .is_some_and(|span| span.contains_inclusive(offset))
    }

    /// Line/column of a global offset, or `None` if it is not in this file.
    pub fn line_col(&self, offset: TextSize) -> Option<LineCol> {
        let base = self.base?;
        if !self.contains_offset(offset) {
            return None;
        }
        Some(self.line_index.line_col(offset - base))
    }
}

/// A file's place in the position space.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FileEntry {
    pub id: FileId,
    pub base: TextSize,
    pub len: TextSize,
}

/// Allocates [`FileId`]s and base offsets for source files.
///
/// All files of all packages share one offset space, so a bare offset (a
/// symbol's declaration position, say) identifies both the file and the
/// place within it. Files are laid out back to back with a one byte gap,
/// which keeps EOF offsets unambiguous.
#[derive(Debug, Default)]
pub struct FileSet {
    inner: RwLock<FileSetInner>,
}

#[derive(Debug, Default)]
struct FileSetInner {
    by_path: IndexMap<Arc<str>, FileEntry>,
    next_base: u32,
}

impl FileSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or allocate the entry for a path.
    ///
    /// A path seen before keeps its original entry; `len` is ignored then.
    /// Offsets are `u32`, so all files together (plus one gap byte each)
    /// must fit in 4 GiB. Returns `None` for a new path once that space is
    /// exhausted.
    pub fn add_file(&self, path: &str, len: TextSize) -> Option<FileEntry> {
        // Fast path: read lock
        {
            let inner = self.inner.read();
            if let Some(&entry) = inner.by_path.get(path) {
                return Some(entry);
            }
        }

        let mut inner = self.inner.write();

        // Double-check
        if let Some(&entry) = inner.by_path.get(path) {
            return Some(entry);
        }

        let allocated = u32::try_from(inner.by_path.len()).ok().and_then(|index| {
            let next_base = inner.next_base.checked_add(u32::from(len))?.checked_add(1)?;
            Some((index, next_base))
        });
        let Some((index, next_base)) = allocated else {
            tracing::warn!(path, len = u32::from(len), "file set position space exhausted");
            return None;
        };

        let entry = FileEntry {
            id: FileId::new(index),
            base: TextSize::from(inner.next_base),
            len,
        };
        inner.next_base = next_base;
        inner.by_path.insert(Arc::from(path), entry);
        Some(entry)
    }

    pub fn entry(&self, path: &str) -> Option<FileEntry> {
        self.inner.read().by_path.get(path).copied()
    }

    pub fn path(&self, file: FileId) -> Option<Arc<str>> {
        let inner = self.inner.read();
        inner
            .by_path
            .get_index(file.index() as usize)
            .map(|(path, _)| path.clone())
    }

    /// The file containing a global offset.
    pub fn file_at(&self, offset: TextSize) -> Option<FileEntry> {
        let inner = self.inner.read();
        inner
            .by_path
            .values()
            .find(|entry| entry.base <= offset && offset <= entry.base + entry.len)
            .copied()
    }

    pub fn len(&self) -> usize {
        self.inner.read().by_path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

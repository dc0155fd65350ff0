//! Hand-built syntax trees over real source text.
//!
//! Tests write the source they mean, then build the tree the front end would
//! produce for it, locating nodes by searching the text.

use pkgnav::base::{LineIndex, TextRange, TextSize};
use pkgnav::syntax::{FileEntry, FileSet, NodeId, NodeKind, SyntaxFile, TreeBuilder};

/// Builds one file of a package.
pub struct FileFixture {
    pub builder: TreeBuilder,
    pub entry: FileEntry,
    path: String,
    text: &'static str,
}

impl FileFixture {
    pub fn new(files: &FileSet, path: &str, text: &'static str) -> Self {
        Self {
            builder: TreeBuilder::new(),
            entry: files
                .add_file(path, TextSize::of(text))
                .expect("fixture fits the position space"),
            path: path.to_string(),
            text,
        }
    }

    /// Global range of the `n`-th occurrence of `snippet`.
    pub fn find(&self, snippet: &str, n: usize) -> TextRange {
        let (local, _) = self
            .text
            .match_indices(snippet)
            .nth(n)
            .unwrap_or_else(|| panic!("no occurrence {n} of {snippet:?}"));
        TextRange::at(self.entry.base + TextSize::from(local as u32), TextSize::of(snippet))
    }

    /// Global range of the `n`-th occurrence of `word` as a whole word.
    pub fn word(&self, word: &str, n: usize) -> TextRange {
        let is_word_byte = |b: u8| b.is_ascii_alphanumeric() || b == b'_';
        let bytes = self.text.as_bytes();
        let (local, _) = self
            .text
            .match_indices(word)
            .filter(|&(at, _)| {
                let before = at.checked_sub(1).map(|i| bytes[i]);
                let after = bytes.get(at + word.len()).copied();
                !before.is_some_and(is_word_byte) && !after.is_some_and(is_word_byte)
            })
            .nth(n)
            .unwrap_or_else(|| panic!("no word occurrence {n} of {word:?}"));
        TextRange::at(self.entry.base + TextSize::from(local as u32), TextSize::of(word))
    }

    /// Global offset of the `n`-th occurrence of `snippet`.
    pub fn at(&self, snippet: &str, n: usize) -> TextSize {
        self.find(snippet, n).start()
    }

    pub fn ident(&mut self, name: &str, n: usize) -> NodeId {
        let range = self.word(name, n);
        self.builder.ident(name, range.start())
    }

    pub fn node(
        &mut self,
        kind: NodeKind,
        range: TextRange,
        children: impl IntoIterator<Item = NodeId>,
    ) -> NodeId {
        self.builder.node(kind, range, children)
    }

    pub fn range(&self, node: NodeId) -> TextRange {
        self.builder.cover(&[node])
    }

    /// Finish the file with the given top-level nodes under a `File` root.
    pub fn finish(mut self, top_level: impl IntoIterator<Item = NodeId>) -> SyntaxFile {
        let span = TextRange::at(self.entry.base, TextSize::of(self.text));
        let root = self.builder.node(NodeKind::File, span, top_level);
        SyntaxFile::new(
            self.entry.id,
            self.path,
            self.entry.base,
            LineIndex::new(self.text),
            self.builder.finish(root),
        )
    }
}

/// Cover two ranges.
pub fn span(from: TextRange, to: TextRange) -> TextRange {
    from.cover(to)
}

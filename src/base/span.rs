//! Source text positions and ranges.

use std::fmt;

pub use text_size::TextRange;
pub use text_size::TextSize;

/// A line and column position in a source file.
///
/// Both are 0-indexed internally and displayed 1-indexed as `line:col`,
/// which is the form used in navigation error messages.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default, PartialOrd, Ord)]
pub struct LineCol {
    /// 0-indexed line number
    pub line: u32,
    /// 0-indexed column (in UTF-8 bytes, not characters)
    pub col: u32,
}

impl LineCol {
    #[inline]
    pub const fn new(line: u32, col: u32) -> Self {
        Self { line, col }
    }

    /// 1-based line, as editors and error messages show it.
    #[inline]
    pub const fn line_one_indexed(self) -> u32 {
        self.line + 1
    }

    /// 1-based column.
    #[inline]
    pub const fn col_one_indexed(self) -> u32 {
        self.col + 1
    }
}

impl fmt::Debug for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineCol({self})")
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line_one_indexed(), self.col_one_indexed())
    }
}

/// Line starts of one file, for converting file-local offsets to
/// [`LineCol`]s and back.
///
/// Always holds at least one line, so the EOF offset of an empty file still
/// maps to `0:0`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineIndex {
    line_starts: Vec<TextSize>,
    len: TextSize,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(text.match_indices('\n').map(|(at, _)| at + 1))
            .map(|start| TextSize::from(start as u32))
            .collect();

        Self {
            line_starts,
            len: TextSize::of(text),
        }
    }

    /// Index for a file whose text is not kept around, given the byte length
    /// of each line including its newline.
    pub fn from_line_lengths(lengths: &[u32]) -> Self {
        let ends = lengths.iter().scan(0u32, |end, &len| {
            *end += len;
            Some(*end)
        });
        let mut line_starts: Vec<TextSize> = std::iter::once(0)
            .chain(ends)
            .map(TextSize::from)
            .collect();

        // The running total after the last line is the file length.
        let len = if lengths.is_empty() {
            TextSize::from(0)
        } else {
            line_starts.pop().unwrap_or_default()
        };
        Self { line_starts, len }
    }

    /// Line and column of a file-local offset. Offsets past EOF land on the
    /// last line.
    pub fn line_col(&self, offset: TextSize) -> LineCol {
        let line = self
            .line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1);
        let col = offset - self.line_starts[line];

        LineCol::new(line as u32, col.into())
    }

    /// The file-local offset of a position, or `None` past EOF.
    pub fn offset(&self, pos: LineCol) -> Option<TextSize> {
        let start = *self.line_starts.get(pos.line as usize)?;
        let offset = start + TextSize::from(pos.col);
        (offset <= self.len).then_some(offset)
    }

    pub fn text_len(&self) -> TextSize {
        self.len
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.line_starts.len()
    }

    /// Whether the file is empty. An empty file still has one line.
    pub fn is_empty(&self) -> bool {
        self.len == TextSize::from(0)
    }
}

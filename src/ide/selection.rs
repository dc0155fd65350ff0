//! Selection ranges: expanding selection regions.
//!
//! Built from the syntax path enclosing the cursor, so every step of
//! "Expand Selection" is a real syntax node.

use crate::base::TextSize;
use crate::hir::{NavResult, Package, enclosing_path};

/// One step of an expanding selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionRange {
    /// Start line (0-indexed)
    pub start_line: u32,
    /// Start column (0-indexed)
    pub start_col: u32,
    /// End line (0-indexed)
    pub end_line: u32,
    /// End column (0-indexed)
    pub end_col: u32,
}

/// Get selection ranges at an offset, innermost first.
///
/// Nodes sharing the exact same bounds (a call and its parenthesized
/// operand, say) produce a single range.
pub fn selection_ranges(package: &Package, offset: TextSize) -> NavResult<Vec<SelectionRange>> {
    let (path, _) = enclosing_path(package, offset, offset)?;
    let file = path.file();
    let tree = path.tree();

    let mut ranges: Vec<SelectionRange> = path
        .iter()
        .filter_map(|node| {
            let range = tree.range(node);
            let start = file.line_col(range.start())?;
            let end = file.line_col(range.end())?;
            Some(SelectionRange {
                start_line: start.line,
                start_col: start.col,
                end_line: end.line,
                end_col: end.col,
            })
        })
        .collect();

    // Deduplicate ranges with the same bounds
    ranges.dedup();

    Ok(ranges)
}

//! Foundation types shared by the syntax, semantic and IDE layers.
//!
//! - [`FileId`] - Handle for a source file registered in a [`FileSet`](crate::syntax::FileSet)
//! - [`TextRange`], [`TextSize`] - Byte offsets in the global position space
//! - [`LineCol`], [`LineIndex`] - Line/column conversion within one file
//!
//! This module has NO dependencies on other pkgnav modules.

mod file_id;
mod span;

pub use file_id::FileId;
pub use span::{LineCol, LineIndex, TextRange, TextSize};

// Re-export text-size types for convenience
pub use text_size;

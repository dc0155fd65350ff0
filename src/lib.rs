//! # pkgnav-base
//!
//! Semantic navigation core for a package-based, statically typed language:
//! a process-wide cache of compiled packages, classification of the syntax
//! node under the cursor, and cross-package declaration lookup.
//!
//! Parsing and type checking happen elsewhere; this crate receives syntax
//! trees and resolved symbols as inputs and never modifies them.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide     → IDE features (describe, goto-def, references, selection)
//!   ↓
//! hir     → Package cache, node classifier, declaration resolver
//!   ↓
//! syntax  → Arena syntax trees, files, enclosing-path search
//!   ↓
//! base    → Primitives (FileId, TextRange, LineIndex)
//! ```

/// Foundation types: FileId, TextRange, line/column conversion
pub mod base;

/// Syntax trees and position lookup
pub mod syntax;

/// Package cache and semantic queries
pub mod hir;

/// IDE features: describe, goto-definition, find-references
pub mod ide;

// Re-export foundation types
pub use base::{FileId, LineCol, LineIndex, TextRange, TextSize};

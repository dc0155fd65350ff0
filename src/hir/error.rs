//! Error types for navigation queries.

use thiserror::Error;

use crate::base::{LineCol, TextSize};

use super::ids::ImportPath;

/// Errors returned by the resolver, the classifier and the IDE layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    /// No syntax node covers the requested offset.
    #[error("no node found at offset {}", u32::from(*offset))]
    NotFound { offset: TextSize },

    /// The cache has no package under this import path.
    #[error("package {import_path} is not loaded")]
    UnknownPackage { import_path: ImportPath },

    /// A symbol's declaring package is not in the cache.
    #[error("import package {import_path} of package {package} does not exist")]
    MissingImport {
        import_path: ImportPath,
        package: ImportPath,
    },

    /// The symbol belongs to the universe scope and has no declaration.
    #[error("{name} is predeclared and has no declaration")]
    Universe { name: String },

    /// The node at a declaration position is not an identifier.
    #[error("invalid node: {kind} ({start}-{end})")]
    InvalidNode {
        kind: &'static str,
        start: LineCol,
        end: LineCol,
    },

    /// The classifier ran out of ancestors without reaching a verdict.
    #[error("classifier exhausted the path starting at a {node} node")]
    InvariantViolation { node: &'static str },
}

pub type NavResult<T> = Result<T, NavError>;

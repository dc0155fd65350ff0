//! Diagnostics reported by the front end for a package.
//!
//! They are carried on the [`Package`](super::Package) unchanged. A package
//! with errors is still cached and navigable.

use std::sync::Arc;

use crate::base::{FileId, TextRange};

/// Which stage of the front end produced a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// Package loading or listing failed (missing import, bad build tags).
    List,
    Parse,
    Type,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
}

/// A diagnostic message with an optional location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub severity: Severity,
    /// The file containing this diagnostic, when known.
    pub file: Option<FileId>,
    /// The offending range in the global position space.
    pub range: Option<TextRange>,
    pub message: Arc<str>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    pub fn error(kind: DiagnosticKind, message: impl Into<Arc<str>>) -> Self {
        Self {
            kind,
            severity: Severity::Error,
            file: None,
            range: None,
            message: message.into(),
        }
    }

    /// Create a new warning diagnostic.
    pub fn warning(kind: DiagnosticKind, message: impl Into<Arc<str>>) -> Self {
        Self {
            severity: Severity::Warning,
            ..Self::error(kind, message)
        }
    }

    /// Attach the location of the diagnostic.
    pub fn at(mut self, file: FileId, range: TextRange) -> Self {
        self.file = Some(file);
        self.range = Some(range);
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

//! Input types handed over by the build layer.

use std::sync::Arc;

use crate::syntax::SyntaxFile;

use super::diagnostics::Diagnostic;
use super::ids::{ImportPath, PackageId};
use super::symbols::TypeInfo;

/// A loaded package as produced by the build/import layer, with the
/// descriptors of everything it imports.
///
/// Descriptors form a DAG; a dependency shared by several importers is the
/// same `Arc`. [`GlobalCache::add`](super::GlobalCache::add) turns the graph
/// into cached [`Package`](super::Package)s.
#[derive(Clone, Debug)]
pub struct PackageDescriptor {
    pub id: PackageId,
    pub import_path: ImportPath,
    pub files: Vec<SyntaxFile>,
    pub diagnostics: Vec<Diagnostic>,
    pub type_info: Arc<TypeInfo>,
    pub imports: Vec<Arc<PackageDescriptor>>,
}

impl PackageDescriptor {
    /// A descriptor with no files, diagnostics or imports. The id defaults to
    /// the import path.
    pub fn new(import_path: impl Into<ImportPath>) -> Self {
        let import_path = import_path.into();
        Self {
            id: PackageId::new(import_path.as_str()),
            import_path,
            files: Vec::new(),
            diagnostics: Vec::new(),
            type_info: Arc::new(TypeInfo::new()),
            imports: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: PackageId) -> Self {
        self.id = id;
        self
    }

    pub fn with_file(mut self, file: SyntaxFile) -> Self {
        self.files.push(file);
        self
    }

    pub fn with_type_info(mut self, type_info: TypeInfo) -> Self {
        self.type_info = Arc::new(type_info);
        self
    }

    pub fn with_diagnostic(mut self, diagnostic: Diagnostic) -> Self {
        self.diagnostics.push(diagnostic);
        self
    }

    pub fn with_import(mut self, import: Arc<PackageDescriptor>) -> Self {
        self.imports.push(import);
        self
    }
}

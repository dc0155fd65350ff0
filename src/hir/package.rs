//! Compiled packages as stored in the global cache.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::base::{FileId, TextSize};
use crate::syntax::SyntaxFile;

use super::diagnostics::Diagnostic;
use super::ids::{ImportPath, PackageId};
use super::input::PackageDescriptor;
use super::symbols::TypeInfo;

/// One package: its syntax trees, semantic tables and import edges.
///
/// Packages are immutable once published in the
/// [`GlobalCache`](super::GlobalCache). Import edges are shared handles to
/// the instances that were canonical when this package was built, so an edge
/// outlives a later [`put`](super::GlobalCache::put) over its target path.
/// Edges only point at packages published earlier, so the graph is acyclic.
#[derive(Debug)]
pub struct Package {
    id: PackageId,
    import_path: ImportPath,
    files: Vec<SyntaxFile>,
    diagnostics: Vec<Diagnostic>,
    type_info: Arc<TypeInfo>,
    imports: FxHashMap<ImportPath, Arc<Package>>,
}

impl Package {
    /// Build a package from a descriptor, without imports.
    pub fn from_descriptor(desc: &PackageDescriptor) -> Self {
        Self {
            id: desc.id.clone(),
            import_path: desc.import_path.clone(),
            files: desc.files.clone(),
            diagnostics: desc.diagnostics.clone(),
            type_info: desc.type_info.clone(),
            imports: FxHashMap::default(),
        }
    }

    pub fn id(&self) -> &PackageId {
        &self.id
    }

    pub fn import_path(&self) -> &ImportPath {
        &self.import_path
    }

    pub fn files(&self) -> &[SyntaxFile] {
        &self.files
    }

    pub fn file(&self, id: FileId) -> Option<&SyntaxFile> {
        self.files.iter().find(|file| file.id() == id)
    }

    /// The first position-valid file containing `offset`.
    pub fn file_at(&self, offset: TextSize) -> Option<&SyntaxFile> {
        self.files
            .iter()
            .find(|file| file.is_position_valid() && file.contains_offset(offset))
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn type_info(&self) -> &TypeInfo {
        &self.type_info
    }

    /// The package imported under `path`.
    pub fn import(&self, path: &str) -> Option<Arc<Package>> {
        self.imports.get(path).cloned()
    }

    /// Import paths of the direct imports, sorted.
    pub fn import_paths(&self) -> Vec<ImportPath> {
        let mut paths: Vec<_> = self.imports.keys().cloned().collect();
        paths.sort();
        paths
    }

    /// Wire an edge to an already published package. Only valid before this
    /// package is itself published.
    pub(crate) fn add_import(&mut self, import: &Arc<Package>) {
        self.imports
            .insert(import.import_path.clone(), Arc::clone(import));
    }
}

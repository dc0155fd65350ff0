//! AnalysisHost and Analysis: the entry point for IDE features.
//!
//! The `AnalysisHost` owns the package cache; `Analysis` is a cheap,
//! read-only view used to answer queries. Packages are immutable once
//! cached, so any number of `Analysis` values can be used concurrently
//! while the build layer keeps adding packages.
//!
//! ## Usage
//!
//! ```ignore
//! let host = AnalysisHost::new();
//! host.add_package(&descriptor);
//!
//! let analysis = host.analysis();
//! let targets = analysis.goto_definition("example.com/app", offset)?;
//! ```

use std::sync::Arc;

use crate::base::TextSize;
use crate::hir::{GlobalCache, NavError, NavResult, NodeRef, Package, PackageDescriptor, Symbol};
use crate::syntax::NodeKind;

use super::{
    Description, GotoResult, Reference, SelectionRange, describe, find_references,
    goto_definition, selection_ranges,
};

/// Owns the package cache for the IDE layer.
#[derive(Debug, Default, Clone)]
pub struct AnalysisHost {
    cache: Arc<GlobalCache>,
}

impl AnalysisHost {
    /// Create a host with an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a host over an existing cache, shared with other services.
    pub fn with_cache(cache: Arc<GlobalCache>) -> Self {
        Self { cache }
    }

    /// Register a root package and everything it imports.
    pub fn add_package(&self, desc: &PackageDescriptor) -> Arc<Package> {
        self.cache.add(desc)
    }

    pub fn cache(&self) -> &Arc<GlobalCache> {
        &self.cache
    }

    /// Get a view for querying.
    pub fn analysis(&self) -> Analysis<'_> {
        Analysis { cache: &self.cache }
    }
}

/// Read-only query interface over the package cache.
#[derive(Clone, Copy, Debug)]
pub struct Analysis<'a> {
    cache: &'a GlobalCache,
}

impl<'a> Analysis<'a> {
    /// The cached package for an import path.
    pub fn package(&self, import_path: &str) -> NavResult<Arc<Package>> {
        self.cache
            .get(import_path)
            .ok_or_else(|| NavError::UnknownPackage {
                import_path: import_path.into(),
            })
    }

    /// Describe the node selected by `[start, end)`.
    pub fn describe(&self, import_path: &str, start: TextSize, end: TextSize) -> NavResult<Description> {
        let package = self.package(import_path)?;
        describe(&package, start, end)
    }

    /// Go to the declaration of the identifier at `offset`.
    pub fn goto_definition(&self, import_path: &str, offset: TextSize) -> NavResult<GotoResult> {
        let package = self.package(import_path)?;
        goto_definition(self.cache, &package, offset)
    }

    /// The symbol the identifier at `offset` declares or refers to.
    pub fn symbol_at(&self, import_path: &str, offset: TextSize) -> NavResult<Option<Symbol>> {
        let package = self.package(import_path)?;
        let (path, _) = crate::hir::enclosing_path(&package, offset, offset)?;
        let symbol = path
            .innermost()
            .filter(|&node| matches!(path.tree().kind(node), NodeKind::Ident(_)))
            .and_then(|node| {
                package
                    .type_info()
                    .object_of(NodeRef::new(path.file().id(), node))
            })
            .cloned();
        Ok(symbol)
    }

    /// Find every reference to `symbol` in the cache.
    pub fn find_references(&self, symbol: &Symbol) -> Vec<Reference> {
        find_references(self.cache, symbol)
    }

    /// Expanding selection ranges at `offset`.
    pub fn selection_ranges(&self, import_path: &str, offset: TextSize) -> NavResult<Vec<SelectionRange>> {
        let package = self.package(import_path)?;
        selection_ranges(&package, offset)
    }
}

//! Find references across every cached package.

use rayon::prelude::*;

use crate::base::{FileId, TextRange};
use crate::hir::{GlobalCache, ImportPath, Package, Symbol};

/// A single reference location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reference {
    pub package: ImportPath,
    pub file: FileId,
    pub range: TextRange,
    /// Start line (0-indexed).
    pub start_line: u32,
    /// Start column (0-indexed).
    pub start_col: u32,
    /// Whether this is the declaring identifier rather than a use.
    pub is_definition: bool,
}

/// Find every identifier bound to `symbol`, declarations included, ordered
/// by file and offset.
///
/// The package list is snapshotted with [`GlobalCache::walk`]; packages are
/// then searched in parallel without holding the cache lock.
pub fn find_references(cache: &GlobalCache, symbol: &Symbol) -> Vec<Reference> {
    let mut packages = Vec::new();
    cache.walk(|package| {
        packages.push(package.clone());
        false
    });

    let mut references: Vec<Reference> = packages
        .par_iter()
        .flat_map_iter(|package| references_in(package, symbol))
        .collect();

    references.sort_by_key(|r| (r.file, r.range.start()));
    references.dedup();
    references
}

fn references_in(package: &Package, symbol: &Symbol) -> Vec<Reference> {
    let info = package.type_info();
    info.idents_of(symbol)
        .filter_map(|ident| {
            let file = package.file(ident.file)?;
            let range = file.tree().range(ident.node);
            let start = file.line_col(range.start())?;
            Some(Reference {
                package: package.import_path().clone(),
                file: ident.file,
                range,
                start_line: start.line,
                start_col: start.col,
                is_definition: info.use_of(ident).is_none(),
            })
        })
        .collect()
}

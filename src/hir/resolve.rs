//! Position and symbol resolution.
//!
//! - [`enclosing_path`] - the tightest syntax path around a byte interval
//! - [`Resolver::declaration_node`] - the identifier declaring a symbol, in
//!   whichever cached package declares it
//! - [`find_symbol_by_name`] - name-only lookup in a package's definitions

use std::sync::Arc;

use crate::base::{LineCol, TextRange, TextSize};
use crate::syntax::{NodeId, SyntaxFile, SyntaxPath, path_enclosing_interval};

use super::cache::GlobalCache;
use super::error::{NavError, NavResult};
use super::package::Package;
use super::symbols::Symbol;

/// Find the syntax path enclosing `[start, end)` in `package`.
///
/// The first position-valid file containing `start` is searched. Returns the
/// path (innermost first) and whether its innermost node spans the interval
/// exactly.
///
/// # Errors
///
/// [`NavError::NotFound`] if no file of the package contains `start`.
pub fn enclosing_path(
    package: &Package,
    start: TextSize,
    end: TextSize,
) -> NavResult<(SyntaxPath<'_>, bool)> {
    let not_found = NavError::NotFound { offset: start };
    let file = package.file_at(start).ok_or(not_found.clone())?;
    let (nodes, exact) = path_enclosing_interval(file.tree(), start, end);
    if nodes.is_empty() {
        return Err(not_found);
    }
    Ok((SyntaxPath::from_root_first(file, nodes), exact))
}

/// Look up a defined symbol by name.
///
/// Definitions are scanned in declaration order and the first match wins.
/// Only the name is compared, so with several declarations of the same name
/// in different scopes the result may not be the one intended.
pub fn find_symbol_by_name<'a>(package: &'a Package, name: &str) -> Option<&'a Symbol> {
    package
        .type_info()
        .defs()
        .find(|(_, symbol)| symbol.name == name)
        .map(|(_, symbol)| symbol)
}

/// The declaring identifier of a symbol.
#[derive(Clone, Debug)]
pub struct Declaration {
    /// The package whose syntax contains the declaration.
    pub package: Arc<Package>,
    pub file: SyntaxFile,
    pub node: NodeId,
}

impl Declaration {
    pub fn name(&self) -> &str {
        self.file
            .tree()
            .kind(self.node)
            .ident_text()
            .unwrap_or_default()
    }

    pub fn range(&self) -> TextRange {
        self.file.tree().range(self.node)
    }

    /// Start and end of the identifier as line/column pairs.
    pub fn line_cols(&self) -> (LineCol, LineCol) {
        line_cols(&self.file, self.range())
    }

    /// The path from the identifier up to its file root.
    pub fn path(&self) -> SyntaxPath<'_> {
        SyntaxPath::from_node(&self.file, self.node)
    }
}

/// Resolves symbols to declarations across the packages of a cache.
#[derive(Clone, Copy, Debug)]
pub struct Resolver<'a> {
    cache: &'a GlobalCache,
}

impl<'a> Resolver<'a> {
    pub fn new(cache: &'a GlobalCache) -> Self {
        Self { cache }
    }

    /// Find the identifier that declares `symbol`.
    ///
    /// `package` is searched first. If the declaration position lies outside
    /// it, the symbol's own package is fetched from the cache and searched
    /// instead.
    ///
    /// # Errors
    ///
    /// - [`NavError::Universe`] for builtins and `nil`
    /// - [`NavError::MissingImport`] if the declaring package is not cached
    /// - [`NavError::NotFound`] if no file of the declaring package contains
    ///   the position
    /// - [`NavError::InvalidNode`] if the node found is not an identifier
    pub fn declaration_node(
        &self,
        package: &Arc<Package>,
        symbol: &Symbol,
    ) -> NavResult<Declaration> {
        let Some(owner_path) = symbol.package.as_ref() else {
            return Err(NavError::Universe {
                name: symbol.name.to_string(),
            });
        };

        if let Ok((path, _)) = enclosing_path(package, symbol.pos, symbol.pos) {
            return declaration_from_path(package, &path);
        }

        tracing::debug!(
            symbol = %symbol.name,
            from = %package.import_path(),
            owner = %owner_path,
            "declaration is in another package"
        );
        let Some(owner) = self.cache.get(owner_path.as_str()) else {
            tracing::debug!(owner = %owner_path, "declaring package is not cached");
            return Err(NavError::MissingImport {
                import_path: owner_path.clone(),
                package: package.import_path().clone(),
            });
        };

        let (path, _) = enclosing_path(&owner, symbol.pos, symbol.pos)?;
        declaration_from_path(&owner, &path)
    }
}

fn declaration_from_path(package: &Arc<Package>, path: &SyntaxPath<'_>) -> NavResult<Declaration> {
    let file = path.file();
    let node = path
        .innermost()
        .ok_or(NavError::NotFound { offset: TextSize::from(0) })?;

    let kind = file.tree().kind(node);
    if !kind.is_ident() {
        let (start, end) = line_cols(file, file.tree().range(node));
        return Err(NavError::InvalidNode {
            kind: kind.name(),
            start,
            end,
        });
    }

    Ok(Declaration {
        package: package.clone(),
        file: file.clone(),
        node,
    })
}

fn line_cols(file: &SyntaxFile, range: TextRange) -> (LineCol, LineCol) {
    (
        file.line_col(range.start()).unwrap_or_default(),
        file.line_col(range.end()).unwrap_or_default(),
    )
}

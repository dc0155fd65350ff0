//! Go-to-definition implementation.

use std::sync::Arc;

use smol_str::SmolStr;

use crate::base::{FileId, TextSize};
use crate::hir::{
    Declaration, GlobalCache, ImportPath, NavResult, NodeRef, Package, Resolver, Symbol,
    SymbolKind, enclosing_path,
};
use crate::syntax::NodeKind;

/// Result of a go-to-definition request.
#[derive(Clone, Debug, Default)]
pub struct GotoResult {
    /// The targets to jump to.
    pub targets: Vec<GotoTarget>,
}

impl GotoResult {
    /// Create an empty result (no targets found).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a result with a single target.
    pub fn single(target: GotoTarget) -> Self {
        Self {
            targets: vec![target],
        }
    }

    /// Check if any targets were found.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

/// A target location for go-to-definition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GotoTarget {
    /// The package declaring the symbol.
    pub package: ImportPath,
    /// The file containing the target.
    pub file: FileId,
    pub path: Arc<str>,
    /// Start line (0-indexed).
    pub start_line: u32,
    /// Start column (0-indexed).
    pub start_col: u32,
    /// End line (0-indexed).
    pub end_line: u32,
    /// End column (0-indexed).
    pub end_col: u32,
    pub kind: SymbolKind,
    pub name: SmolStr,
}

impl GotoTarget {
    fn new(decl: &Declaration, symbol: &Symbol) -> Self {
        let (start, end) = decl.line_cols();
        Self {
            package: decl.package.import_path().clone(),
            file: decl.file.id(),
            path: Arc::from(decl.file.path()),
            start_line: start.line,
            start_col: start.col,
            end_line: end.line,
            end_col: end.col,
            kind: symbol.kind,
            name: symbol.name.clone(),
        }
    }
}

/// Find the definition of the identifier at `offset`.
///
/// A cursor on a selector jumps to the selected member. Identifiers that do
/// not resolve, and builtins or `nil`, give an empty result.
///
/// # Errors
///
/// Propagates resolver failures: no node at `offset`, a declaring package
/// missing from the cache, or a declaration position that is not an
/// identifier.
pub fn goto_definition(
    cache: &GlobalCache,
    package: &Arc<Package>,
    offset: TextSize,
) -> NavResult<GotoResult> {
    let (path, _) = enclosing_path(package, offset, offset)?;
    let Some(node) = path.innermost() else {
        return Ok(GotoResult::empty());
    };

    let ident = match path.tree().kind(node) {
        NodeKind::Ident(_) => node,
        NodeKind::Selector { sel } => *sel,
        _ => return Ok(GotoResult::empty()),
    };

    let info = package.type_info();
    let Some(symbol) = info.object_of(NodeRef::new(path.file().id(), ident)) else {
        return Ok(GotoResult::empty());
    };
    if symbol.kind.is_universe() {
        return Ok(GotoResult::empty());
    }

    let decl = Resolver::new(cache).declaration_node(package, symbol)?;
    Ok(GotoResult::single(GotoTarget::new(&decl, symbol)))
}

//! Resolved symbols and the per-package semantic tables.
//!
//! The front end resolves every identifier and records the outcome in a
//! [`TypeInfo`]. This crate treats it as a read-only oracle.

use indexmap::IndexMap;
use rustc_hash::{FxHashMap, FxHashSet};
use smol_str::SmolStr;

use crate::base::TextSize;

use super::ids::{ImportPath, NodeRef};

/// The kind of entity a [`Symbol`] denotes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    /// The local name of an imported package.
    PackageName,
    Const,
    Var,
    Label,
    TypeName,
    Func,
    Builtin,
    Nil,
}

impl SymbolKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            SymbolKind::PackageName => "package",
            SymbolKind::Const => "const",
            SymbolKind::Var => "var",
            SymbolKind::Label => "label",
            SymbolKind::TypeName => "type",
            SymbolKind::Func => "func",
            SymbolKind::Builtin => "builtin",
            SymbolKind::Nil => "nil",
        }
    }

    /// Builtins and `nil` belong to the universe scope, not to a package.
    pub fn is_universe(&self) -> bool {
        matches!(self, SymbolKind::Builtin | SymbolKind::Nil)
    }
}

/// A resolved semantic entity.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Symbol {
    pub name: SmolStr,
    pub kind: SymbolKind,
    /// Import path of the declaring package; `None` for universe objects.
    pub package: Option<ImportPath>,
    /// Offset of the declaring identifier in the global position space.
    pub pos: TextSize,
}

impl Symbol {
    pub fn new(
        name: impl AsRef<str>,
        kind: SymbolKind,
        package: impl Into<ImportPath>,
        pos: TextSize,
    ) -> Self {
        Self {
            name: SmolStr::new(name),
            kind,
            package: Some(package.into()),
            pos,
        }
    }

    /// A builtin function or `nil`.
    pub fn universe(name: impl AsRef<str>, kind: SymbolKind) -> Self {
        Self {
            name: SmolStr::new(name),
            kind,
            package: None,
            pos: TextSize::from(0),
        }
    }
}

/// Semantic facts about one package, keyed by syntax node.
#[derive(Clone, Debug, Default)]
pub struct TypeInfo {
    /// Declaring identifiers, in declaration order. `None` marks names that
    /// declare nothing, such as the package clause name.
    defs: IndexMap<NodeRef, Option<Symbol>>,
    /// Referring identifiers, including the member identifier of selectors.
    uses: FxHashMap<NodeRef, Symbol>,
    /// Expressions that denote a type rather than a value.
    type_exprs: FxHashSet<NodeRef>,
}

impl TypeInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_def(&mut self, ident: NodeRef, symbol: Option<Symbol>) {
        self.defs.insert(ident, symbol);
    }

    pub fn record_use(&mut self, ident: NodeRef, symbol: Symbol) {
        self.uses.insert(ident, symbol);
    }

    pub fn record_type_expr(&mut self, expr: NodeRef) {
        self.type_exprs.insert(expr);
    }

    /// The symbol an identifier declares or refers to.
    pub fn object_of(&self, ident: NodeRef) -> Option<&Symbol> {
        match self.defs.get(&ident) {
            Some(def) => def.as_ref(),
            None => self.uses.get(&ident),
        }
    }

    /// The symbol an identifier refers to, ignoring declarations.
    pub fn use_of(&self, ident: NodeRef) -> Option<&Symbol> {
        self.uses.get(&ident)
    }

    pub fn is_type_expr(&self, expr: NodeRef) -> bool {
        self.type_exprs.contains(&expr)
    }

    /// Defined symbols in declaration order.
    pub fn defs(&self) -> impl Iterator<Item = (NodeRef, &Symbol)> + '_ {
        self.defs
            .iter()
            .filter_map(|(&node, symbol)| symbol.as_ref().map(|symbol| (node, symbol)))
    }

    /// Every identifier bound to `symbol`, declaring or referring.
    pub fn idents_of<'a>(&'a self, symbol: &'a Symbol) -> impl Iterator<Item = NodeRef> + 'a {
        let defs = self
            .defs()
            .filter(move |(_, def)| *def == symbol)
            .map(|(node, _)| node);
        let uses = self
            .uses
            .iter()
            .filter(move |(_, used)| *used == symbol)
            .map(|(&node, _)| node);
        defs.chain(uses)
    }
}

//! Classification of syntax paths.
//!
//! Given the path from an arbitrary node up to the file root, [`classify`]
//! decides which node on (or just below) the path best represents what the
//! user is pointing at, and whether that is an expression, a type, a
//! statement or part of a package reference.

use std::fmt;

use crate::syntax::{NodeKind, SyntaxPath, TypeKind};

use super::error::{NavError, NavResult};
use super::ids::NodeRef;
use super::symbols::{SymbolKind, TypeInfo};

/// What an interesting node is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeCategory {
    /// None of the below.
    Unknown,
    /// A value expression, or a reference to a constant, variable or function.
    Expr,
    /// A type expression, or a reference to a named type.
    Type,
    /// A statement, or a label.
    Stmt,
    /// An import spec, a package name reference or the package clause.
    Package,
}

impl fmt::Display for NodeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeCategory::Unknown => "unknown",
            NodeCategory::Expr => "expression",
            NodeCategory::Type => "type",
            NodeCategory::Stmt => "statement",
            NodeCategory::Package => "package",
        };
        f.write_str(name)
    }
}

/// Classify the node denoted by `path` and narrow the path to the most
/// interesting associated node, which may be the node itself, an ancestor
/// or a descendant.
///
/// Pure: the result depends only on the path and `info`.
///
/// # Errors
///
/// [`NavError::InvariantViolation`] if the path runs out without a verdict.
/// A path that reaches its file root always gets one, so this indicates a
/// malformed tree.
pub fn classify<'a>(
    mut path: SyntaxPath<'a>,
    info: &TypeInfo,
) -> NavResult<(SyntaxPath<'a>, NodeCategory)> {
    let tree = path.tree();
    let file = path.file().id();
    let start_kind = path.kind(0).map_or("empty", NodeKind::name);

    while let Some(node) = path.innermost() {
        match tree.kind(node) {
            NodeKind::DeclGroup { specs } => {
                if let [spec] = specs.as_slice() {
                    path.descend(*spec);
                    continue;
                }
                return Ok((path, NodeCategory::Unknown));
            }

            NodeKind::FuncDecl { name } => {
                path.descend(*name);
                continue;
            }

            NodeKind::ImportSpec => return Ok((path, NodeCategory::Package)),

            NodeKind::ValueSpec { names } => {
                if let [name] = names.as_slice() {
                    path.descend(*name);
                    continue;
                }
                return Ok((path, NodeCategory::Unknown));
            }

            NodeKind::TypeSpec { name } => {
                path.descend(*name);
                continue;
            }

            NodeKind::Stmt(_) => return Ok((path, NodeCategory::Stmt)),

            NodeKind::Type(_) => return Ok((path, NodeCategory::Type)),

            NodeKind::Comment
            | NodeKind::CommentGroup
            | NodeKind::File
            | NodeKind::KeyValue
            | NodeKind::CommClause => return Ok((path, NodeCategory::Unknown)),

            // `[...]T`, `f(x...)`, `func(x ...T)`: the enclosing node decides.
            NodeKind::Ellipsis => {}

            NodeKind::Field { names } => {
                if let [name] = names.as_slice() {
                    path.descend(*name);
                    continue;
                }
                // Embedded field or several names: the field list decides.
            }

            NodeKind::FieldList => {}

            NodeKind::BasicLit(_) => {
                if matches!(path.kind(1), Some(NodeKind::ImportSpec)) {
                    path.ascend(1);
                    return Ok((path, NodeCategory::Package));
                }
                return Ok((path, NodeCategory::Expr));
            }

            NodeKind::Selector { sel } => {
                if info.use_of(NodeRef::new(file, *sel)).is_none() {
                    return Ok((path, NodeCategory::Unknown));
                }
                path.descend(*sel);
                continue;
            }

            NodeKind::Ident(_) => {
                let Some(symbol) = info.object_of(NodeRef::new(file, node)) else {
                    return Ok(classify_unresolved_ident(path));
                };
                match symbol.kind {
                    SymbolKind::PackageName => return Ok((path, NodeCategory::Package)),
                    SymbolKind::Const | SymbolKind::Func | SymbolKind::Nil => {
                        return Ok((path, NodeCategory::Expr));
                    }
                    SymbolKind::Label => return Ok((path, NodeCategory::Stmt)),
                    SymbolKind::TypeName => return Ok((path, NodeCategory::Type)),
                    SymbolKind::Var => {
                        // For x in `struct { x T }`, describe the struct type.
                        if is_struct_field_name(&path) {
                            path.ascend(3);
                            return Ok((path, NodeCategory::Type));
                        }
                        return Ok((path, NodeCategory::Expr));
                    }
                    SymbolKind::Builtin => {
                        // Describe the enclosing call instead.
                        path.ascend(1);
                        continue;
                    }
                }
            }

            NodeKind::Star => {
                let category = if info.is_type_expr(NodeRef::new(file, node)) {
                    NodeCategory::Type
                } else {
                    NodeCategory::Expr
                };
                return Ok((path, category));
            }

            NodeKind::Expr(_) => return Ok((path, NodeCategory::Expr)),

            NodeKind::Bad => {}
        }

        path.ascend(1);
    }

    tracing::error!(
        file = %file,
        start = start_kind,
        "node classification exhausted the path"
    );
    Err(NavError::InvariantViolation { node: start_kind })
}

/// An identifier the semantic model knows nothing about; its parent decides.
fn classify_unresolved_ident(mut path: SyntaxPath<'_>) -> (SyntaxPath<'_>, NodeCategory) {
    match path.kind(1) {
        Some(NodeKind::Selector { .. }) => {
            path.ascend(1);
            (path, NodeCategory::Expr)
        }
        // The package clause name.
        Some(NodeKind::File) => (path, NodeCategory::Package),
        Some(NodeKind::ImportSpec) => {
            path.ascend(1);
            (path, NodeCategory::Package)
        }
        // Blank identifiers, type switch bindings, names in files the
        // semantic model did not cover, and field names.
        _ => (path, NodeCategory::Unknown),
    }
}

fn is_struct_field_name(path: &SyntaxPath<'_>) -> bool {
    matches!(
        (path.kind(1), path.kind(2), path.kind(3)),
        (
            Some(NodeKind::Field { .. }),
            Some(NodeKind::FieldList),
            Some(NodeKind::Type(TypeKind::Struct))
        )
    )
}

//! Syntax trees as handed over by the front end.
//!
//! The front end parses and builds [`SyntaxTree`]s with a [`TreeBuilder`];
//! this crate only reads them. [`SyntaxPath`] and
//! [`path_enclosing_interval`] locate nodes by position.

mod file;
mod kind;
mod path;
mod tree;

pub use file::{FileEntry, FileSet, SyntaxFile};
pub use kind::{ExprKind, LitKind, NodeKind, StmtKind, TypeKind};
pub use path::{SyntaxPath, path_enclosing_interval};
pub use tree::{NodeId, SyntaxTree, TreeBuilder};

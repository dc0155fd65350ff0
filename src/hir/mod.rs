//! Semantic layer: cached packages and what their syntax means.
//!
//! ## Key Types
//!
//! - [`GlobalCache`] - Process-wide, deduplicated package graph
//! - [`Package`] - One compiled package: files, [`TypeInfo`], import edges
//! - [`PackageDescriptor`] - A loaded package as handed over by the build layer
//! - [`classify`] - Picks the interesting node of a syntax path
//! - [`Resolver`] - Finds declarations, across packages if needed
//!
//! ## Flow
//!
//! ```text
//! PackageDescriptor graph
//!     │  GlobalCache::add (recursive, dedup by import path)
//!     ▼
//! GlobalCache ──get──▶ Package
//!     │                  │ enclosing_path(offset)
//!     │                  ▼
//!     │              SyntaxPath ──classify──▶ (SyntaxPath, NodeCategory)
//!     │
//!     └──▶ Resolver::declaration_node(package, symbol) ──▶ Declaration
//! ```

mod cache;
mod classify;
mod diagnostics;
mod error;
mod ids;
mod input;
mod package;
mod resolve;
mod symbols;

pub use cache::GlobalCache;
pub use classify::{NodeCategory, classify};
pub use diagnostics::{Diagnostic, DiagnosticKind, Severity};
pub use error::{NavError, NavResult};
pub use ids::{ImportPath, NodeRef, PackageId};
pub use input::PackageDescriptor;
pub use package::Package;
pub use resolve::{Declaration, Resolver, enclosing_path, find_symbol_by_name};
pub use symbols::{Symbol, SymbolKind, TypeInfo};

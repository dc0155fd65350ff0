//! IDE features: High-level APIs for editor requests.
//!
//! This module provides the interface between the semantic layer (HIR)
//! and the protocol server. Each function corresponds to an editor request.
//!
//! ## Design Principles
//!
//! 1. **Pure functions**: Take data in, return data out
//! 2. **No protocol types**: Uses our own types, converted at the boundary
//! 3. **Composable**: Built on top of the cache, classifier and resolver
//!
//! ## Usage
//!
//! The recommended way to use this module is through `AnalysisHost`:
//!
//! ```ignore
//! use pkgnav::ide::AnalysisHost;
//!
//! let host = AnalysisHost::new();
//! host.add_package(&main_descriptor);
//!
//! let analysis = host.analysis();
//! let description = analysis.describe("main", start, end)?;
//! ```

mod analysis;
mod describe;
mod goto;
mod references;
mod selection;

pub use analysis::{Analysis, AnalysisHost};
pub use describe::{Description, describe};
pub use goto::{GotoResult, GotoTarget, goto_definition};
pub use references::{Reference, find_references};
pub use selection::{SelectionRange, selection_ranges};

//! Test harness for the mold quote workspace.
//!
//! Provides STL fixtures, mesh builders, and a fluent API for scripting
//! upload → calculate workflows through the real dispatch path.
//!
//! # Key Components
//!
//! - [`QuoteBuilder`]: Fluent API driving `quote_bridge::dispatch`
//! - [`stl`]: Binary and ASCII STL writers for triangle lists
//! - [`helpers`]: Error type and mesh builders (boxes, tetrahedra)
//! - [`assertions`]: Float assertions with diagnostics
//! - [`report`]: Text and JSON session summaries

pub mod assertions;
pub mod helpers;
pub mod report;
pub mod stl;
pub mod workflow;

pub use helpers::HarnessError;
pub use report::QuoteReport;
pub use workflow::QuoteBuilder;

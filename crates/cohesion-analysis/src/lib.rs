//! cohesion-analysis: field co-occurrence analysis for C++ classes.
//!
//! - [`ast`]: the node arena every provider builds and the engine reads
//! - [`engine`]: scoped search, member tallies, co-occurrence, significance
//! - [`parsers`]: the tree-sitter C++ provider
//! - [`render`]: text tables and JSON reports
//! - [`pipeline`]: file in, class reports out

pub mod ast;
pub mod engine;
pub mod parsers;
pub mod pipeline;
pub mod render;

pub use ast::{AstTree, NodeId, NodeKind, SourceLocation, SourceNode};
pub use engine::{ClassReport, CooccurrenceMatrix};
pub use parsers::{AstProvider, CppAstProvider};
pub use pipeline::{analyze_file, analyze_file_with};

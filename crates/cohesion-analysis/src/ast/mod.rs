//! Arena-backed syntax tree consumed by the analysis engine.
//!
//! Nodes are owned by [`AstTree`]; everything else refers to them through
//! [`NodeId`] handles, including the lexical-parent back reference.

pub mod node;
pub mod tree;

pub use node::{NodeId, NodeKind, SourceLocation, SourceNode};
pub use tree::AstTree;

//! AST providers: turn source text into an [`AstTree`](crate::ast::AstTree).

pub mod cpp;
pub mod error_tolerant;
pub mod traits;

pub use cpp::CppAstProvider;
pub use traits::AstProvider;

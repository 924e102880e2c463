//! cohesion-core: shared foundations for the cohesion analyzer.
//!
//! - Errors: one `thiserror` enum per subsystem plus stable error codes
//! - Config: TOML-based, CLI > config file > defaults
//! - Tracing: `tracing-subscriber` setup driven by `COHESION_LOG`
//! - Types: collection aliases used across the workspace

pub mod config;
pub mod errors;
pub mod tracing;
pub mod types;

pub use config::CohesionConfig;
pub use errors::{AnalysisError, CohesionErrorCode, ConfigError, ParseError};

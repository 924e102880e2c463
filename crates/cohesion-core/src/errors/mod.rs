//! Error handling for cohesion.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod analysis_error;
pub mod config_error;
pub mod error_code;
pub mod parse_error;

pub use analysis_error::AnalysisError;
pub use config_error::ConfigError;
pub use error_code::CohesionErrorCode;
pub use parse_error::ParseError;

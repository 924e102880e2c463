//! Errors surfaced by the binary.

use cohesion_core::errors::error_code::{self, CohesionErrorCode};
use cohesion_core::errors::AnalysisError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error("Cannot serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

impl CohesionErrorCode for CliError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Analysis(e) => e.error_code(),
            Self::Json(_) => error_code::OUTPUT_ERROR,
        }
    }
}

//! Configuration system for cohesion.
//! TOML-based, 3-layer resolution: CLI > config file > defaults.

pub mod cohesion_config;
pub mod output_config;
pub mod significance_config;

pub use cohesion_config::{CliOverrides, CohesionConfig};
pub use output_config::{OutputConfig, OutputFormat};
pub use significance_config::SignificanceConfig;

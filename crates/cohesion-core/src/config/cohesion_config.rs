//! Top-level cohesion configuration with 3-layer resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{OutputConfig, OutputFormat, SignificanceConfig};
use crate::errors::ConfigError;

/// Name of the project config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "cohesion.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Config file (`--config <path>`, else `cohesion.toml` in the working directory)
/// 3. Compiled defaults
///
/// Environment variables are deliberately not a layer: analysis output depends
/// only on the input file and the explicit flags/config.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CohesionConfig {
    pub significance: SignificanceConfig,
    pub output: OutputConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub min_count: Option<u32>,
    pub threshold: Option<f64>,
    pub color: Option<bool>,
    pub format: Option<OutputFormat>,
}

impl CohesionConfig {
    /// Load configuration with 3-layer resolution.
    ///
    /// An explicit `config_path` must exist. Without one, `cohesion.toml` in
    /// `working_dir` is merged when present and silently skipped otherwise.
    pub fn load(
        working_dir: &Path,
        config_path: Option<&Path>,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 2: config file
        match config_path {
            Some(path) => Self::merge_toml_file(&mut config, path)?,
            None => {
                let project_config_path: PathBuf = working_dir.join(CONFIG_FILE_NAME);
                if project_config_path.exists() {
                    Self::merge_toml_file(&mut config, &project_config_path)?;
                }
            }
        }

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &CohesionConfig) -> Result<(), ConfigError> {
        if let Some(threshold) = config.significance.threshold {
            if !(0.0..=1.0).contains(&threshold) {
                return Err(ConfigError::ValidationFailed {
                    field: "significance.threshold".to_string(),
                    message: "must be between 0.0 and 1.0".to_string(),
                });
            }
        }
        if config.significance.min_count == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "significance.min_count".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut CohesionConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: CohesionConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        debug!(path = %path.display(), "merged config file");
        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a `Some` value.
    fn merge(base: &mut CohesionConfig, other: &CohesionConfig) {
        if other.significance.min_count.is_some() {
            base.significance.min_count = other.significance.min_count;
        }
        if other.significance.threshold.is_some() {
            base.significance.threshold = other.significance.threshold;
        }
        if other.output.color.is_some() {
            base.output.color = other.output.color;
        }
        if other.output.format.is_some() {
            base.output.format = other.output.format;
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut CohesionConfig, cli: &CliOverrides) {
        if let Some(v) = cli.min_count {
            config.significance.min_count = Some(v);
        }
        if let Some(v) = cli.threshold {
            config.significance.threshold = Some(v);
        }
        if let Some(v) = cli.color {
            config.output.color = Some(v);
        }
        if let Some(v) = cli.format {
            config.output.format = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

//! Output configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How per-class results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Qualified name followed by the aligned matrix table.
    #[default]
    Table,
    /// One JSON document with every class report.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format '{other}' (expected table or json)")),
        }
    }
}

/// Configuration for rendering.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    /// ANSI styling of field names in tables. Default: false.
    pub color: Option<bool>,
    /// Output format. Default: table.
    pub format: Option<OutputFormat>,
}

impl OutputConfig {
    pub fn effective_color(&self) -> bool {
        self.color.unwrap_or(false)
    }

    pub fn effective_format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }
}

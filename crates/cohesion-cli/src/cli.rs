use std::path::PathBuf;

use clap::Parser;
use cohesion_core::config::{CliOverrides, OutputFormat};

/// cohesion: method/field co-occurrence tables for the classes in a C++ file
#[derive(Parser, Debug)]
#[command(name = "cohesion", version)]
#[command(about = "Print a field co-occurrence table for every class declared in a C++ source file", long_about = None)]
pub struct Cli {
    /// C++ source file to analyze
    pub path: PathBuf,

    /// Config file (default: ./cohesion.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Bold field names in tables
    #[arg(long)]
    pub color: bool,

    /// Output format: table or json
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Also print field pairs whose conditional frequency exceeds the threshold
    #[arg(long)]
    pub significant: bool,

    /// Ignore fields referenced by fewer methods than this
    #[arg(long)]
    pub min_count: Option<u32>,

    /// Conditional-frequency threshold in [0, 1]
    #[arg(long)]
    pub threshold: Option<f64>,
}

impl Cli {
    /// Parse CLI arguments from the environment
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Flags that override the config file. Unset flags leave it alone.
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            min_count: self.min_count,
            threshold: self.threshold,
            color: self.color.then_some(true),
            format: self.format,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_path_only() {
        let cli = Cli::try_parse_from(["cohesion", "widget.cpp"]).unwrap();
        assert_eq!(cli.path, PathBuf::from("widget.cpp"));
        assert!(cli.config.is_none());
        assert!(!cli.color);
        assert!(!cli.significant);
        assert!(cli.format.is_none());

        let overrides = cli.overrides();
        assert!(overrides.color.is_none());
        assert!(overrides.min_count.is_none());
    }

    #[test]
    fn test_missing_path_is_a_usage_error() {
        let err = Cli::try_parse_from(["cohesion"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_extra_path_is_a_usage_error() {
        let err = Cli::try_parse_from(["cohesion", "a.cpp", "b.cpp"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_all_overrides() {
        let cli = Cli::try_parse_from([
            "cohesion",
            "--config",
            "ci/cohesion.toml",
            "--color",
            "--format",
            "json",
            "--significant",
            "--min-count",
            "3",
            "--threshold",
            "0.75",
            "src/widget.cpp",
        ])
        .unwrap();
        assert_eq!(cli.path, PathBuf::from("src/widget.cpp"));
        assert_eq!(cli.config, Some(PathBuf::from("ci/cohesion.toml")));
        assert!(cli.significant);

        let overrides = cli.overrides();
        assert_eq!(overrides.min_count, Some(3));
        assert_eq!(overrides.threshold, Some(0.75));
        assert_eq!(overrides.color, Some(true));
        assert_eq!(overrides.format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let err = Cli::try_parse_from(["cohesion", "--format", "xml", "a.cpp"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }
}

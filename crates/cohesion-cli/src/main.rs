mod cli;
mod error;
mod output;

use std::path::Path;
use std::process::ExitCode;

use cohesion_analysis::pipeline::analyze_file;
use cohesion_core::errors::{AnalysisError, CohesionErrorCode};
use cohesion_core::tracing::init_tracing;
use cohesion_core::CohesionConfig;
use tracing::debug;

use crate::cli::Cli;
use crate::error::CliError;

fn main() -> ExitCode {
    init_tracing();

    // Usage errors exit here with clap's message and status 2.
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e.report_string());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let config = CohesionConfig::load(Path::new("."), cli.config.as_deref(), Some(&cli.overrides()))
        .map_err(AnalysisError::from)?;
    debug!(?config, "resolved configuration");

    let reports = analyze_file(&cli.path)?;
    print!("{}", output::render(&reports, &config, cli.significant)?);
    Ok(())
}

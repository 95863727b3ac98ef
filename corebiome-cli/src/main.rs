use clap::Parser;
use colored::*;
use std::process;
use tracing_subscriber::EnvFilter;

mod cli;

use crate::cli::{Cli, Commands};
use corebiome_core::BiomeError;

fn main() {
    let cli = Cli::parse();

    // COREBIOME_LOG sets the filter, -v/-vv raise it
    let log_level = match cli.verbose {
        0 => std::env::var("COREBIOME_LOG").unwrap_or_else(|_| "warn".to_string()),
        1 => "info".to_string(),
        _ => "debug".to_string(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&log_level).unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);

        let exit_code = match e.downcast_ref::<BiomeError>() {
            Some(BiomeError::Configuration(_)) => 2,
            Some(BiomeError::Io(_)) => 3,
            Some(BiomeError::Serialization(_)) => 4,
            Some(
                BiomeError::InvalidInput(_)
                | BiomeError::NotFound(_)
                | BiomeError::UnknownSample(_)
                | BiomeError::SampleCountMismatch { .. }
                | BiomeError::SampleIndexOutOfRange { .. }
                | BiomeError::DetachedNode { .. }
                | BiomeError::DuplicateClassId(_),
            ) => 5,
            _ => 1,
        };
        process::exit(exit_code);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Compute(args) => crate::cli::commands::compute::run(args),
        Commands::Thresholds(args) => crate::cli::commands::thresholds::run(args),
        Commands::Config { command } => crate::cli::commands::config::run(command),
    }
}

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "corebiome",
    version,
    about = "Core and rare biome inference over hierarchical classifications",
    long_about = "Corebiome finds the classes (taxa, functional categories) of a classification \
                  tree that are detected in at least (core) or at most (rare) a given number of \
                  the selected samples, using per-sample detection thresholds."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the core or rare biome of a set of samples
    Compute(commands::compute::ComputeArgs),

    /// Show per-sample detection thresholds of a dataset
    Thresholds(commands::thresholds::ThresholdsArgs),

    /// Show or create the configuration file
    Config {
        #[command(subcommand)]
        command: commands::config::ConfigCommands,
    },
}

use anyhow::Result;
use clap::Subcommand;
use corebiome_core::{default_config_path, save_config, BiomeError, Config};
use std::path::PathBuf;

use super::load_effective_config;
use crate::cli::output;

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show {
        /// Configuration file (default: $COREBIOME_HOME/config.toml)
        #[arg(long, value_name = "FILE")]
        path: Option<PathBuf>,
    },

    /// Write a configuration file with default values
    Init {
        /// Target file (default: $COREBIOME_HOME/config.toml)
        #[arg(long, value_name = "FILE")]
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

pub fn run(command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show { path } => {
            let config = load_effective_config(path.as_deref())?;
            let contents = toml::to_string_pretty(&config).map_err(|e| {
                BiomeError::Configuration(format!("Failed to serialize config: {}", e))
            })?;
            print!("{}", contents);
            Ok(())
        }
        ConfigCommands::Init { path, force } => {
            let path = path.unwrap_or_else(default_config_path);
            if path.exists() && !force {
                return Err(BiomeError::Configuration(format!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                ))
                .into());
            }

            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).map_err(BiomeError::from)?;
            }
            save_config(&path, &Config::default())?;
            output::success(&format!("Wrote default configuration to {}", path.display()));
            Ok(())
        }
    }
}

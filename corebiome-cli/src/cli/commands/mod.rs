pub mod compute;
pub mod config;
pub mod thresholds;

use anyhow::Result;
use corebiome_core::{default_config_path, load_config, BiomeError, Config};
use corebiome_utils::report::{render_json, render_text, Report};
use std::path::Path;
use tracing::debug;

/// Configuration from an explicit file, else from the default location.
///
/// A missing default file yields the built-in defaults; a missing explicit
/// file is an error.
pub fn load_effective_config(path: Option<&Path>) -> Result<Config> {
    if let Some(path) = path {
        debug!("Loading config from {}", path.display());
        return Ok(load_config(path)?);
    }

    let default_path = default_config_path();
    if default_path.exists() {
        debug!("Loading config from {}", default_path.display());
        Ok(load_config(&default_path)?)
    } else {
        Ok(Config::default())
    }
}

/// Render a report in the requested format
pub fn render_report(report: &Report, format: &str) -> Result<String> {
    let content = match format.to_lowercase().as_str() {
        "json" => render_json(report)?,
        "text" | "txt" => render_text(report)?,
        _ => {
            return Err(BiomeError::InvalidInput(format!(
                "Unknown format '{}'. Use: text, json",
                format
            ))
            .into())
        }
    };
    Ok(content)
}

/// Write rendered output to a file, or stdout when no file is given
pub fn write_output(content: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, content).map_err(BiomeError::from)?;
            super::output::success(&format!("Report written to {}", path.display()));
        }
        None => print!("{}", content),
    }
    Ok(())
}

use anyhow::{Context, Result};
use clap::Args;
use corebiome_bio::{compute_core_biome, BiomeDataset};
use corebiome_core::{BiomeConfig, BiomeError, BiomeMode, BiomeParameters};
use corebiome_utils::report::{biome_report, BiomeReportOptions};
use std::path::PathBuf;

use super::{load_effective_config, render_report, write_output};
use crate::cli::output;

#[derive(Args)]
pub struct ComputeArgs {
    /// Dataset file (JSON)
    #[arg(value_name = "DATASET")]
    pub dataset: PathBuf,

    /// Comma-separated sample names (default: all samples)
    #[arg(short = 's', long, value_delimiter = ',', value_name = "NAMES")]
    pub samples: Vec<String>,

    /// Keep classes detected in at least N selected samples (core biome)
    #[arg(long, value_name = "N", conflicts_with = "max_samples")]
    pub min_samples: Option<usize>,

    /// Keep classes detected in at most N selected samples (rare biome)
    #[arg(long, value_name = "N")]
    pub max_samples: Option<usize>,

    /// Per-sample detection threshold as a percentage of the sample's reads
    #[arg(long, value_name = "PERCENT", allow_negative_numbers = true)]
    pub detection_percent: Option<f32>,

    /// Classification whose total defines the biome size
    #[arg(long, value_name = "NAME")]
    pub primary: Option<String>,

    /// Configuration file (default: $COREBIOME_HOME/config.toml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(short = 'f', long, value_name = "FORMAT")]
    pub format: Option<String>,

    /// Write the report to a file instead of stdout
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Leave detection thresholds out of the report
    #[arg(long)]
    pub no_thresholds: bool,
}

impl ComputeArgs {
    /// Configured parameters with command-line overrides applied
    pub fn parameters(&self, config: &BiomeConfig) -> BiomeParameters {
        let mut params = config.to_parameters();
        if let Some(n) = self.min_samples {
            params.mode = BiomeMode::Core;
            params.samples_threshold = n;
        }
        if let Some(n) = self.max_samples {
            params.mode = BiomeMode::Rare;
            params.samples_threshold = n;
        }
        if let Some(percent) = self.detection_percent {
            params.detection_threshold_percent = percent;
        }
        if let Some(primary) = &self.primary {
            params.primary_classification = primary.clone();
        }
        params
    }
}

pub fn run(args: ComputeArgs) -> Result<()> {
    let config = load_effective_config(args.config.as_deref())?;
    let params = args.parameters(&config.biome);

    let dataset = BiomeDataset::load_json(&args.dataset)
        .with_context(|| format!("Failed to load dataset {}", args.dataset.display()))?;

    let selection = if args.samples.is_empty() {
        dataset.all_samples()
    } else {
        dataset.sample_selection(&args.samples)?
    };
    if selection.is_empty() {
        output::warning("No samples selected, the biome is empty");
    }

    if dataset.classification(&params.primary_classification).is_none() {
        let available = dataset.classification_names().join(", ");
        // A name given on the command line is taken as a typo, a configured one
        // falls back to the other classifications
        if args.primary.is_some() {
            return Err(BiomeError::NotFound(format!(
                "classification '{}' (have: {})",
                params.primary_classification, available
            ))
            .into());
        }
        output::info(&format!(
            "Primary classification '{}' not in dataset (have: {}), biome size falls back to the others",
            params.primary_classification, available
        ));
    }

    let biome = compute_core_biome(&dataset, &selection, &params)?;

    let options = BiomeReportOptions {
        show_thresholds: config.output.show_thresholds && !args.no_thresholds,
    };
    let report = biome_report(&biome, options);
    let format = args.format.as_deref().unwrap_or(&config.output.format);
    let content = render_report(&report, format)?;

    write_output(&content, args.output.as_deref())
}

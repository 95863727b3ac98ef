use anyhow::{Context, Result};
use clap::Args;
use corebiome_bio::{BiomeDataset, DetectionThresholds};
use corebiome_utils::report::{Report, Reportable, Section};
use std::path::PathBuf;

use super::{load_effective_config, render_report, write_output};

#[derive(Args)]
pub struct ThresholdsArgs {
    /// Dataset file (JSON)
    #[arg(value_name = "DATASET")]
    pub dataset: PathBuf,

    /// Detection threshold as a percentage of each sample's reads
    #[arg(long, value_name = "PERCENT", allow_negative_numbers = true)]
    pub detection_percent: Option<f32>,

    /// Configuration file (default: $COREBIOME_HOME/config.toml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(short = 'f', long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Thresholds of every classification of a dataset
struct DatasetThresholds {
    percent: f32,
    samples: Vec<String>,
    classifications: Vec<(String, DetectionThresholds)>,
}

impl Reportable for DatasetThresholds {
    fn to_report(&self) -> Report {
        let mut report = Report::new("Detection Thresholds", "thresholds")
            .with_metadata("Detection threshold", format!("{}%", self.percent))
            .with_metadata("Samples", self.samples.len());

        for (name, thresholds) in &self.classifications {
            let samples = self.samples.iter().map(String::as_str).enumerate();
            report.push(Section::thresholds(name.clone(), samples, thresholds));
        }
        report
    }
}

pub fn run(args: ThresholdsArgs) -> Result<()> {
    let config = load_effective_config(args.config.as_deref())?;
    let params = match args.detection_percent {
        Some(percent) => config.biome.to_parameters().with_detection_percent(percent),
        None => config.biome.to_parameters(),
    };
    params.validate()?;
    let percent = params.detection_threshold_percent;

    let dataset = BiomeDataset::load_json(&args.dataset)
        .with_context(|| format!("Failed to load dataset {}", args.dataset.display()))?;

    let classifications = dataset
        .classifications()
        .map(|(name, classification)| {
            DetectionThresholds::compute(dataset.number_of_samples(), &classification.counts, percent)
                .map(|thresholds| (name.to_string(), thresholds))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let result = DatasetThresholds {
        percent,
        samples: dataset.sample_names().to_vec(),
        classifications,
    };

    let format = args.format.as_deref().unwrap_or(&config.output.format);
    let content = render_report(&result.to_report(), format)?;
    write_output(&content, None)
}

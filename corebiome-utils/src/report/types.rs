//! Report of a computed biome
use super::document::{Highlight, Metric, Report, Reportable, Section};
use corebiome_bio::CoreBiome;
use corebiome_core::BiomeMode;

/// How much of a biome result goes into its report
#[derive(Debug, Clone, Copy)]
pub struct BiomeReportOptions {
    pub show_thresholds: bool,
}

impl Default for BiomeReportOptions {
    fn default() -> Self {
        Self {
            show_thresholds: true,
        }
    }
}

pub fn biome_report(biome: &CoreBiome, options: BiomeReportOptions) -> Report {
    let params = &biome.parameters;
    let (title, bound_label) = match params.mode {
        BiomeMode::Core => ("Core Biome", "Minimum samples"),
        BiomeMode::Rare => ("Rare Biome", "Maximum samples"),
    };
    let size_highlight = if biome.biome_size > 0 {
        Highlight::Good
    } else {
        Highlight::Attention
    };

    let mut report = Report::new(title, "compute")
        .with_metadata("Primary classification", &params.primary_classification)
        .with_metadata("Samples", biome.selected_samples.join(", "));

    report.push(Section::summary(
        "Summary",
        vec![
            Metric::new("Mode", params.mode),
            Metric::new(bound_label, params.samples_threshold),
            Metric::new(
                "Detection threshold",
                format!("{}%", params.detection_threshold_percent),
            ),
            Metric::new("Selected samples", biome.selected_samples.len()),
            Metric::new("Classifications", biome.classifications.len()),
            Metric::new("Kept classes", biome.total_entries()),
            Metric::new("Biome size", biome.biome_size).highlighted(size_highlight),
        ],
    ));

    let selected = || {
        biome
            .selected_indices
            .iter()
            .copied()
            .zip(biome.selected_samples.iter().map(String::as_str))
    };
    for (name, classification) in &biome.classifications {
        report.push(Section::classes(name.clone(), &classification.table));
        if options.show_thresholds {
            report.push(Section::thresholds(
                format!("{} detection thresholds", name),
                selected(),
                &classification.thresholds,
            ));
        }
    }

    report
}

impl Reportable for CoreBiome {
    fn to_report(&self) -> Report {
        biome_report(self, BiomeReportOptions::default())
    }
}

/// Knobs of the core/rare biome computation
use crate::error::{BiomeError, BiomeResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of the taxonomic classification, scanned first for the biome size
pub const TAXONOMY: &str = "Taxonomy";

/// Whether the samples threshold is a lower bound (core) or an upper bound (rare)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BiomeMode {
    /// Keep nodes detected in at least `samples_threshold` samples
    #[default]
    Core,
    /// Keep nodes detected in at most `samples_threshold` samples
    Rare,
}

impl BiomeMode {
    pub fn from_upper_bound(as_upper_bound: bool) -> Self {
        if as_upper_bound {
            Self::Rare
        } else {
            Self::Core
        }
    }

    pub fn is_upper_bound(&self) -> bool {
        matches!(self, Self::Rare)
    }

    /// Prevalence filter applied to a node's number of detecting samples
    pub fn keeps(&self, samples_with_class: usize, samples_threshold: usize) -> bool {
        match self {
            Self::Core => samples_with_class >= samples_threshold,
            Self::Rare => samples_with_class <= samples_threshold,
        }
    }
}

impl fmt::Display for BiomeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Core => write!(f, "core"),
            Self::Rare => write!(f, "rare"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiomeParameters {
    pub mode: BiomeMode,
    pub samples_threshold: usize,
    /// Percentage of a sample's classified reads a node needs to count as detected
    pub detection_threshold_percent: f32,
    /// Classification summed first when computing the biome size
    pub primary_classification: String,
}

impl Default for BiomeParameters {
    fn default() -> Self {
        Self {
            mode: BiomeMode::Core,
            samples_threshold: 1,
            detection_threshold_percent: 0.0,
            primary_classification: TAXONOMY.to_string(),
        }
    }
}

impl BiomeParameters {
    pub fn core(samples_threshold: usize) -> Self {
        Self {
            mode: BiomeMode::Core,
            samples_threshold,
            ..Self::default()
        }
    }

    pub fn rare(samples_threshold: usize) -> Self {
        Self {
            mode: BiomeMode::Rare,
            samples_threshold,
            ..Self::default()
        }
    }

    pub fn with_detection_percent(mut self, percent: f32) -> Self {
        self.detection_threshold_percent = percent;
        self
    }

    pub fn with_primary_classification(mut self, name: impl Into<String>) -> Self {
        self.primary_classification = name.into();
        self
    }

    /// Negative percents are allowed and mean "a single read is enough"
    pub fn validate(&self) -> BiomeResult<()> {
        if !self.detection_threshold_percent.is_finite() {
            return Err(BiomeError::InvalidInput(format!(
                "detection threshold percent must be finite, got {}",
                self.detection_threshold_percent
            )));
        }
        if self.primary_classification.is_empty() {
            return Err(BiomeError::InvalidInput(
                "primary classification name is empty".to_string(),
            ));
        }
        Ok(())
    }
}

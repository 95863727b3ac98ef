//! Configuration types for corebiome

use crate::types::{BiomeMode, BiomeParameters, TAXONOMY};
use crate::BiomeError;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub biome: BiomeConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BiomeConfig {
    /// Minimum (or, with `upper_bound`, maximum) number of detecting samples
    #[serde(default = "default_samples_threshold")]
    pub samples_threshold: usize,
    #[serde(default = "default_detection_threshold_percent")]
    pub detection_threshold_percent: f32,
    /// Compute the rare biome instead of the core biome
    #[serde(default = "default_upper_bound")]
    pub upper_bound: bool,
    #[serde(default = "default_primary_classification")]
    pub primary_classification: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_format")]
    pub format: String,
    #[serde(default = "default_show_thresholds")]
    pub show_thresholds: bool,
}

// Default value functions
fn default_samples_threshold() -> usize { 1 }
fn default_detection_threshold_percent() -> f32 { 0.0 }
fn default_upper_bound() -> bool { false }
fn default_primary_classification() -> String { TAXONOMY.to_string() }
fn default_format() -> String { "text".to_string() }
fn default_show_thresholds() -> bool { true }

impl Default for BiomeConfig {
    fn default() -> Self {
        Self {
            samples_threshold: default_samples_threshold(),
            detection_threshold_percent: default_detection_threshold_percent(),
            upper_bound: default_upper_bound(),
            primary_classification: default_primary_classification(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            show_thresholds: default_show_thresholds(),
        }
    }
}

impl BiomeConfig {
    pub fn to_parameters(&self) -> BiomeParameters {
        BiomeParameters {
            mode: BiomeMode::from_upper_bound(self.upper_bound),
            samples_threshold: self.samples_threshold,
            detection_threshold_percent: self.detection_threshold_percent,
            primary_classification: self.primary_classification.clone(),
        }
    }
}

pub fn default_config() -> Config {
    Config::default()
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, BiomeError> {
    let contents = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)
        .map_err(|e| BiomeError::Configuration(format!("Failed to parse config: {}", e)))?;
    Ok(config)
}

pub fn save_config<P: AsRef<Path>>(path: P, config: &Config) -> Result<(), BiomeError> {
    let contents = toml::to_string_pretty(config)
        .map_err(|e| BiomeError::Configuration(format!("Failed to serialize config: {}", e)))?;
    std::fs::write(path, contents)?;
    Ok(())
}

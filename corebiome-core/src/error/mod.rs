//! Core error types for corebiome

use crate::types::ClassId;
use thiserror::Error;

/// Main error type for biome computations
#[derive(Error, Debug)]
pub enum BiomeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unknown sample: {0}")]
    UnknownSample(String),

    #[error("Sample count mismatch in {context}: expected {expected}, got {actual}")]
    SampleCountMismatch {
        context: String,
        expected: usize,
        actual: usize,
    },

    #[error("Sample index {index} out of range for {number_of_samples} samples")]
    SampleIndexOutOfRange {
        index: usize,
        number_of_samples: usize,
    },

    #[error("Node {child} refers to unknown parent {parent}")]
    DetachedNode { parent: ClassId, child: ClassId },

    #[error("Duplicate class id: {0}")]
    DuplicateClassId(ClassId),

    #[error("Other error: {0}")]
    Other(String),
}

/// Result type alias for biome operations
pub type BiomeResult<T> = Result<T, BiomeError>;

impl BiomeError {
    /// Shorthand for a per-sample length disagreement
    pub fn sample_mismatch(context: impl Into<String>, expected: usize, actual: usize) -> Self {
        BiomeError::SampleCountMismatch {
            context: context.into(),
            expected,
            actual,
        }
    }
}

impl From<serde_json::Error> for BiomeError {
    fn from(err: serde_json::Error) -> Self {
        BiomeError::Serialization(err.to_string())
    }
}

impl From<anyhow::Error> for BiomeError {
    fn from(err: anyhow::Error) -> Self {
        BiomeError::Other(err.to_string())
    }
}

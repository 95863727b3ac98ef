//! Core types shared across all corebiome crates

pub mod config;
pub mod error;
pub mod system;
pub mod types;

// Re-export commonly used types
pub use config::{load_config, save_config, BiomeConfig, Config, OutputConfig};
pub use error::{BiomeError, BiomeResult};

pub use types::{BiomeMode, BiomeParameters, ClassId, SampleSelection, TAXONOMY};

pub use system::{corebiome_home, default_config_path};

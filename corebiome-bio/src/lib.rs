//! Classification trees, count tables and the core/rare biome computation

pub mod biome;
pub mod classification;

// Re-export commonly used types
pub use biome::{
    compute_classification, compute_core_biome, BiomeVisit, ClassificationBiome, CoreBiome,
    CoreBiomeAggregator, DetectionThresholds, OutputTable,
};
pub use classification::{BiomeDataset, Classification, ClassificationTree, CountTable};

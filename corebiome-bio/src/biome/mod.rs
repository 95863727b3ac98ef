//! Core and rare biome computation
//!
//! A node is judged on the reads summarized below it (its own plus all
//! descendants'), but reported with the reads assigned to the node itself.
//! Detection in a sample requires the summarized count to reach that sample's
//! detection threshold.

pub mod aggregate;
pub mod compute;
pub mod detection;

pub use aggregate::{BiomeVisit, CoreBiomeAggregator, OutputTable};
pub use compute::{compute_classification, compute_core_biome, ClassificationBiome, CoreBiome};
pub use detection::DetectionThresholds;

//! Core types used across the corebiome workspace

pub mod class_id;
pub mod parameters;
pub mod selection;

pub use class_id::ClassId;
pub use parameters::{BiomeMode, BiomeParameters, TAXONOMY};
pub use selection::SampleSelection;

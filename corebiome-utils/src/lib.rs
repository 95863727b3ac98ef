//! Shared utilities for corebiome
//!
//! Provides the reports used to present biome results.

pub mod report;

// Re-export commonly used types
pub use report::{
    biome_report, render_json, render_text, BiomeReportOptions, Report, Reportable,
};

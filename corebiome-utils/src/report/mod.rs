//! Reports for biome results
//!
//! Results implement `Reportable` to build a `Report`, which `render_text` or
//! `render_json` turn into command output.
pub mod document;
pub mod renderers;
pub mod types;

pub use document::{
    ClassRow, Highlight, Metric, Report, Reportable, SampleThreshold, Section, SectionBody,
};
pub use renderers::{render_json, render_text};
pub use types::{biome_report, BiomeReportOptions};

//! JSON output: the report document as pretty-printed JSON

use crate::report::document::Report;
use corebiome_core::BiomeResult;

/// Pretty JSON, newline-terminated like the text output
pub fn render_json(report: &Report) -> BiomeResult<String> {
    let mut json = serde_json::to_string_pretty(report)?;
    json.push('\n');
    Ok(json)
}

//! Plain text output with underlined headings and aligned columns

use crate::report::document::{ClassRow, Highlight, Metric, Report, SampleThreshold, SectionBody};
use corebiome_core::BiomeResult;
use std::fmt::Write;

pub fn render_text(report: &Report) -> BiomeResult<String> {
    let mut out = String::new();
    heading(&mut out, &report.title, '=');
    out.push('\n');

    let _ = writeln!(out, "Command: {}", report.command);
    let _ = writeln!(
        out,
        "Generated: {}",
        report.generated.format("%Y-%m-%d %H:%M:%S UTC")
    );
    for (key, value) in &report.metadata {
        let _ = writeln!(out, "{}: {}", key, value);
    }

    for section in &report.sections {
        out.push('\n');
        heading(&mut out, &section.title, '-');
        match &section.body {
            SectionBody::Summary(metrics) => summary(&mut out, metrics),
            SectionBody::Classes(rows) => classes(&mut out, rows),
            SectionBody::Thresholds(entries) => thresholds(&mut out, entries),
        }
    }

    Ok(out)
}

fn heading(out: &mut String, title: &str, rule: char) {
    let _ = writeln!(out, "{}", title);
    let _ = writeln!(out, "{}", rule.to_string().repeat(title.chars().count()));
}

fn summary(out: &mut String, metrics: &[Metric]) {
    for metric in metrics {
        let marker = match metric.highlight {
            Highlight::Plain => "●",
            Highlight::Good => "✓",
            Highlight::Attention => "⚠",
        };
        let _ = writeln!(out, "  {} {}: {}", marker, metric.label, metric.value);
    }
}

fn classes(out: &mut String, rows: &[ClassRow]) {
    let cells = rows
        .iter()
        .map(|row| [row.class_id.to_string(), row.own_count.to_string()])
        .collect::<Vec<_>>();
    columns(out, ["class id", "own count"], &cells);
}

fn thresholds(out: &mut String, entries: &[SampleThreshold]) {
    let cells = entries
        .iter()
        .map(|entry| [entry.sample.clone(), entry.threshold.to_string()])
        .collect::<Vec<_>>();
    columns(out, ["sample", "threshold"], &cells);
}

/// Two left-aligned columns under a dashed rule
fn columns(out: &mut String, headers: [&str; 2], rows: &[[String; 2]]) {
    if rows.is_empty() {
        out.push_str("  (empty)\n");
        return;
    }

    let width = rows
        .iter()
        .map(|row| row[0].chars().count())
        .chain(std::iter::once(headers[0].chars().count()))
        .max()
        .unwrap_or(0);
    let second = rows
        .iter()
        .map(|row| row[1].chars().count())
        .chain(std::iter::once(headers[1].chars().count()))
        .max()
        .unwrap_or(0);

    let _ = writeln!(out, "  {:width$}  {}", headers[0], headers[1], width = width);
    let _ = writeln!(out, "  {}  {}", "-".repeat(width), "-".repeat(second));
    for [first, value] in rows {
        let _ = writeln!(out, "  {:width$}  {}", first, value, width = width);
    }
}

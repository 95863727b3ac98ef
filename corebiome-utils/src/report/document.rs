//! Report documents for biome results
//!
//! A `Report` is a titled list of sections. Section bodies are typed after what
//! the biome commands show: summary metrics, kept classes with their own
//! counts, and per-sample detection thresholds.
use chrono::{DateTime, Utc};
use corebiome_bio::{DetectionThresholds, OutputTable};
use corebiome_core::ClassId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub title: String,
    pub command: String,
    pub generated: DateTime<Utc>,
    /// Shown under the title, in insertion order
    pub metadata: Vec<(String, String)>,
    pub sections: Vec<Section>,
}

impl Report {
    pub fn new(title: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            command: command.into(),
            generated: Utc::now(),
            metadata: Vec::new(),
            sections: Vec::new(),
        }
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.metadata.push((key.into(), value.to_string()));
        self
    }

    pub fn push(&mut self, section: Section) {
        self.sections.push(section);
    }

    pub fn section(&self, title: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.title == title)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub body: SectionBody,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionBody {
    Summary(Vec<Metric>),
    /// Kept classes in ascending class id order
    Classes(Vec<ClassRow>),
    /// One entry per sample, keyed by its dataset index
    Thresholds(Vec<SampleThreshold>),
}

impl Section {
    pub fn summary(title: impl Into<String>, metrics: Vec<Metric>) -> Self {
        Self {
            title: title.into(),
            body: SectionBody::Summary(metrics),
        }
    }

    pub fn classes(title: impl Into<String>, table: &OutputTable) -> Self {
        let rows = table
            .iter()
            .map(|(class_id, own_count)| ClassRow {
                class_id,
                own_count,
            })
            .collect();
        Self {
            title: title.into(),
            body: SectionBody::Classes(rows),
        }
    }

    /// Thresholds of the given `(dataset index, sample name)` pairs. Indices
    /// without a threshold are left out.
    pub fn thresholds<'s>(
        title: impl Into<String>,
        samples: impl IntoIterator<Item = (usize, &'s str)>,
        thresholds: &DetectionThresholds,
    ) -> Self {
        let entries = samples
            .into_iter()
            .filter_map(|(index, sample)| {
                thresholds.get(index).map(|threshold| SampleThreshold {
                    index,
                    sample: sample.to_string(),
                    threshold,
                })
            })
            .collect();
        Self {
            title: title.into(),
            body: SectionBody::Thresholds(entries),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metric {
    pub label: String,
    pub value: String,
    pub highlight: Highlight,
}

impl Metric {
    pub fn new(label: impl Into<String>, value: impl ToString) -> Self {
        Self {
            label: label.into(),
            value: value.to_string(),
            highlight: Highlight::Plain,
        }
    }

    pub fn highlighted(mut self, highlight: Highlight) -> Self {
        self.highlight = highlight;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Highlight {
    Plain,
    Good,
    Attention,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassRow {
    pub class_id: ClassId,
    pub own_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleThreshold {
    pub index: usize,
    pub sample: String,
    pub threshold: u64,
}

/// Results that can present themselves as a report
pub trait Reportable {
    fn to_report(&self) -> Report;
}

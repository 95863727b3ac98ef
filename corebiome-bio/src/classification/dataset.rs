/// Samples plus every classification's tree and count table
use super::{ClassificationTree, CountTable};
use corebiome_core::{BiomeError, BiomeResult, SampleSelection};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// One classification: its hierarchy and the reads assigned to its nodes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classification {
    pub tree: ClassificationTree,
    pub counts: CountTable,
}

impl Classification {
    pub fn new(tree: ClassificationTree, counts: CountTable) -> Self {
        Self { tree, counts }
    }
}

/// Input document for a biome computation.
///
/// Classifications are kept in insertion order; that order decides which
/// classification supplies the biome size when the primary one sums to zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BiomeDataset {
    sample_names: Vec<String>,
    #[serde(default)]
    classifications: IndexMap<String, Classification>,
}

impl BiomeDataset {
    pub fn new<S: Into<String>>(sample_names: impl IntoIterator<Item = S>) -> Self {
        Self {
            sample_names: sample_names.into_iter().map(Into::into).collect(),
            classifications: IndexMap::new(),
        }
    }

    pub fn add_classification(
        &mut self,
        name: impl Into<String>,
        tree: ClassificationTree,
        counts: CountTable,
    ) -> BiomeResult<()> {
        let name = name.into();
        if self.classifications.contains_key(&name) {
            return Err(BiomeError::InvalidInput(format!(
                "classification '{}' already present",
                name
            )));
        }
        self.check_counts(&name, &counts)?;
        self.classifications
            .insert(name, Classification::new(tree, counts));
        Ok(())
    }

    pub fn with_classification(
        mut self,
        name: impl Into<String>,
        tree: ClassificationTree,
        counts: CountTable,
    ) -> BiomeResult<Self> {
        self.add_classification(name, tree, counts)?;
        Ok(self)
    }

    pub fn number_of_samples(&self) -> usize {
        self.sample_names.len()
    }

    pub fn sample_names(&self) -> &[String] {
        &self.sample_names
    }

    pub fn classification(&self, name: &str) -> Option<&Classification> {
        self.classifications.get(name)
    }

    /// Classifications in encounter order
    pub fn classifications(&self) -> impl Iterator<Item = (&str, &Classification)> {
        self.classifications
            .iter()
            .map(|(name, classification)| (name.as_str(), classification))
    }

    pub fn classification_names(&self) -> Vec<&str> {
        self.classifications.keys().map(String::as_str).collect()
    }

    pub fn sample_index(&self, name: &str) -> Option<usize> {
        self.sample_names.iter().position(|sample| sample == name)
    }

    /// Selection of the named samples; unknown names are an error
    pub fn sample_selection<S: AsRef<str>>(
        &self,
        names: impl IntoIterator<Item = S>,
    ) -> BiomeResult<SampleSelection> {
        let mut selection = SampleSelection::none(self.number_of_samples());
        for name in names {
            let name = name.as_ref();
            let index = self
                .sample_index(name)
                .ok_or_else(|| BiomeError::UnknownSample(name.to_string()))?;
            selection.insert(index)?;
        }
        Ok(selection)
    }

    pub fn all_samples(&self) -> SampleSelection {
        SampleSelection::all(self.number_of_samples())
    }

    /// Names of the selected samples, in sample order
    pub fn selected_names(&self, selection: &SampleSelection) -> Vec<String> {
        selection
            .iter()
            .filter_map(|index| self.sample_names.get(index).cloned())
            .collect()
    }

    pub fn validate(&self) -> BiomeResult<()> {
        for (name, classification) in &self.classifications {
            self.check_counts(name, &classification.counts)?;
            classification.counts.validate()?;
        }
        Ok(())
    }

    fn check_counts(&self, name: &str, counts: &CountTable) -> BiomeResult<()> {
        if counts.number_of_samples() != self.number_of_samples() {
            return Err(BiomeError::sample_mismatch(
                format!("classification '{}'", name),
                self.number_of_samples(),
                counts.number_of_samples(),
            ));
        }
        Ok(())
    }

    pub fn from_json_str(json: &str) -> BiomeResult<Self> {
        let dataset: BiomeDataset = serde_json::from_str(json)?;
        dataset.validate()?;
        Ok(dataset)
    }

    pub fn load_json<P: AsRef<Path>>(path: P) -> BiomeResult<Self> {
        let path = path.as_ref();
        debug!("Loading dataset from {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> BiomeResult<()> {
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}

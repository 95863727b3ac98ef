/// Runs thresholds and aggregation for every classification and merges the results
use super::{CoreBiomeAggregator, DetectionThresholds, OutputTable};
use crate::classification::{BiomeDataset, Classification};
use corebiome_core::{BiomeError, BiomeParameters, BiomeResult, SampleSelection};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Result for a single classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationBiome {
    pub table: OutputTable,
    pub thresholds: DetectionThresholds,
}

/// Combined result over all classifications
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoreBiome {
    pub parameters: BiomeParameters,
    pub selected_samples: Vec<String>,
    /// Dataset indices of `selected_samples`
    pub selected_indices: Vec<usize>,
    pub classifications: IndexMap<String, ClassificationBiome>,
    pub biome_size: u64,
}

impl CoreBiome {
    pub fn table(&self, classification: &str) -> Option<&OutputTable> {
        self.classifications
            .get(classification)
            .map(|biome| &biome.table)
    }

    /// Total number of kept nodes across classifications
    pub fn total_entries(&self) -> usize {
        self.classifications
            .values()
            .map(|biome| biome.table.len())
            .sum()
    }
}

/// Detection thresholds and kept nodes for one classification
pub fn compute_classification(
    classification: &Classification,
    selection: &SampleSelection,
    params: &BiomeParameters,
) -> BiomeResult<ClassificationBiome> {
    let counts = &classification.counts;
    let thresholds = DetectionThresholds::compute(
        counts.number_of_samples(),
        counts,
        params.detection_threshold_percent,
    )?;

    let table = CoreBiomeAggregator::new(
        &classification.tree,
        counts,
        selection,
        &thresholds,
        params.mode,
        params.samples_threshold,
    )?
    .aggregate();

    Ok(ClassificationBiome { table, thresholds })
}

/// Core (or rare) biome of the selected samples over every classification of
/// the dataset.
///
/// The biome size is the reportable total of the primary classification or,
/// if that is zero or missing, of the first other classification in dataset
/// order with a non-zero total.
pub fn compute_core_biome(
    dataset: &BiomeDataset,
    selection: &SampleSelection,
    params: &BiomeParameters,
) -> BiomeResult<CoreBiome> {
    params.validate()?;
    if selection.number_of_samples() != dataset.number_of_samples() {
        return Err(BiomeError::sample_mismatch(
            "sample selection",
            dataset.number_of_samples(),
            selection.number_of_samples(),
        ));
    }

    let mut result = CoreBiome {
        parameters: params.clone(),
        selected_samples: dataset.selected_names(selection),
        selected_indices: selection.iter().collect(),
        classifications: IndexMap::new(),
        biome_size: 0,
    };

    if selection.is_empty() {
        info!("No samples selected, skipping {} biome", params.mode);
        return Ok(result);
    }

    info!(
        "Computing {} biome over {} of {} samples (samples threshold {}, detection {}%)",
        params.mode,
        selection.cardinality(),
        dataset.number_of_samples(),
        params.samples_threshold,
        params.detection_threshold_percent
    );

    for (name, classification) in dataset.classifications() {
        let biome = compute_classification(classification, selection, params)?;
        debug!("{}: kept {} classes", name, biome.table.len());
        result.classifications.insert(name.to_string(), biome);
    }

    result.biome_size = biome_size(&result.classifications, &params.primary_classification);
    info!("Biome size: {}", result.biome_size);

    Ok(result)
}

fn biome_size(classifications: &IndexMap<String, ClassificationBiome>, primary: &str) -> u64 {
    let primary_size = classifications
        .get(primary)
        .map_or(0, |biome| biome.table.reportable_total());
    if primary_size > 0 {
        return primary_size;
    }

    classifications
        .iter()
        .filter(|(name, _)| name.as_str() != primary)
        .map(|(_, biome)| biome.table.reportable_total())
        .find(|&size| size > 0)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classification::{ClassificationTree, CountTable};
    use corebiome_core::{ClassId, TAXONOMY};

    fn single_node(id: i32, counts: &[u32]) -> (ClassificationTree, CountTable) {
        let tree =
            ClassificationTree::from_edges(ClassId(1), vec![(ClassId(1), ClassId(id))]).unwrap();
        let table = CountTable::new(counts.len()).with_counts(id, counts).unwrap();
        (tree, table)
    }

    fn table_with(entries: &[(i32, u64)]) -> ClassificationBiome {
        let mut table = OutputTable::new();
        for &(id, value) in entries {
            table.insert(ClassId(id), value);
        }
        ClassificationBiome {
            table,
            thresholds: DetectionThresholds::minimal(1),
        }
    }

    #[test]
    fn test_biome_size_prefers_primary() {
        let mut tables = IndexMap::new();
        tables.insert("SEED".to_string(), table_with(&[(3, 100)]));
        tables.insert(TAXONOMY.to_string(), table_with(&[(2, 7), (-2, 50)]));

        assert_eq!(biome_size(&tables, TAXONOMY), 7);
    }

    #[test]
    fn test_biome_size_falls_back_in_order() {
        let mut tables = IndexMap::new();
        tables.insert(TAXONOMY.to_string(), table_with(&[(-1, 40)]));
        tables.insert("SEED".to_string(), table_with(&[]));
        tables.insert("EC".to_string(), table_with(&[(0, 4), (9, 6)]));
        tables.insert("KEGG".to_string(), table_with(&[(8, 99)]));

        assert_eq!(biome_size(&tables, TAXONOMY), 10);
    }

    #[test]
    fn test_biome_size_all_zero() {
        let mut tables = IndexMap::new();
        tables.insert("SEED".to_string(), table_with(&[(5, 0)]));
        assert_eq!(biome_size(&tables, TAXONOMY), 0);
        assert_eq!(biome_size(&IndexMap::new(), TAXONOMY), 0);
    }

    #[test]
    fn test_empty_selection_short_circuits() {
        let (tree, counts) = single_node(2, &[4, 4]);
        let dataset = BiomeDataset::new(["A", "B"])
            .with_classification(TAXONOMY, tree, counts)
            .unwrap();

        let result = compute_core_biome(
            &dataset,
            &SampleSelection::none(2),
            &BiomeParameters::rare(3),
        )
        .unwrap();

        assert_eq!(result.biome_size, 0);
        assert!(result.classifications.is_empty());
        assert!(result.selected_samples.is_empty());
    }

    #[test]
    fn test_selection_size_must_match_dataset() {
        let (tree, counts) = single_node(2, &[4, 4]);
        let dataset = BiomeDataset::new(["A", "B"])
            .with_classification(TAXONOMY, tree, counts)
            .unwrap();

        let result = compute_core_biome(
            &dataset,
            &SampleSelection::all(3),
            &BiomeParameters::core(1),
        );
        assert!(matches!(result, Err(BiomeError::SampleCountMismatch { .. })));
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        let dataset = BiomeDataset::new(["A"]);
        let params = BiomeParameters::core(1).with_detection_percent(f32::INFINITY);

        let result = compute_core_biome(&dataset, &SampleSelection::all(1), &params);
        assert!(matches!(result, Err(BiomeError::InvalidInput(_))));
    }
}

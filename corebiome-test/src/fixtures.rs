//! Test fixtures and dataset generators

use anyhow::{bail, Result};
use corebiome_bio::{BiomeDataset, ClassificationTree, CountTable};
use corebiome_core::{ClassId, TAXONOMY};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

struct PendingClassification {
    name: String,
    root: i32,
    edges: Vec<(ClassId, ClassId)>,
    counts: Vec<(ClassId, Vec<Option<u32>>)>,
}

/// Fluent builder for small hand-written datasets.
///
/// ```rust
/// use corebiome_test::DatasetBuilder;
///
/// let dataset = DatasetBuilder::new(&["S1", "S2"])
///     .classification("Taxonomy", 1)
///     .node(1, 10, &[5, 0])
///     .build()
///     .unwrap();
/// assert_eq!(dataset.number_of_samples(), 2);
/// ```
pub struct DatasetBuilder {
    samples: Vec<String>,
    classifications: Vec<PendingClassification>,
}

impl DatasetBuilder {
    pub fn new(samples: &[&str]) -> Self {
        Self {
            samples: samples.iter().map(|s| s.to_string()).collect(),
            classifications: Vec::new(),
        }
    }

    /// Start a new classification; following calls add to it
    pub fn classification(mut self, name: &str, root: i32) -> Self {
        self.classifications.push(PendingClassification {
            name: name.to_string(),
            root,
            edges: Vec::new(),
            counts: Vec::new(),
        });
        self
    }

    /// Add a child node with counts
    pub fn node(self, parent: i32, id: i32, counts: &[u32]) -> Self {
        self.edge(parent, id).counts(id, counts)
    }

    /// Add a child node without a count entry
    pub fn edge(mut self, parent: i32, id: i32) -> Self {
        if let Some(current) = self.classifications.last_mut() {
            current.edges.push((ClassId(parent), ClassId(id)));
        }
        self
    }

    /// Set counts for a node already in the tree (e.g. the root)
    pub fn counts(self, id: i32, counts: &[u32]) -> Self {
        self.sparse_counts(id, counts.iter().copied().map(Some).collect())
    }

    /// Set counts with missing entries
    pub fn sparse_counts(mut self, id: i32, counts: Vec<Option<u32>>) -> Self {
        if let Some(current) = self.classifications.last_mut() {
            current.counts.push((ClassId(id), counts));
        }
        self
    }

    pub fn build(self) -> Result<BiomeDataset> {
        let mut dataset = BiomeDataset::new(self.samples.iter().cloned());
        for pending in self.classifications {
            let tree = ClassificationTree::from_edges(ClassId(pending.root), pending.edges)?;
            let mut counts = CountTable::new(self.samples.len());
            for (id, values) in pending.counts {
                if !tree.contains(id) {
                    bail!("counts given for class {} which is not in the tree", id);
                }
                counts.insert(id, values)?;
            }
            dataset.add_classification(pending.name, tree, counts)?;
        }
        Ok(dataset)
    }
}

/// Two samples, one "Taxonomy" classification:
/// root(0) -> A(10, [5, 0]) -> B(11, [5, 3])
pub fn chain_scenario() -> BiomeDataset {
    DatasetBuilder::new(&["S1", "S2"])
        .classification(TAXONOMY, 0)
        .node(0, 10, &[5, 0])
        .node(10, 11, &[5, 3])
        .build()
        .expect("chain scenario is well formed")
}

/// Shape of a generated dataset
#[derive(Debug, Clone)]
pub struct RandomDatasetSpec {
    pub samples: usize,
    pub nodes_per_classification: usize,
    pub classifications: Vec<String>,
    /// Maximum read count per node and sample
    pub max_count: u32,
    /// Probability that a node has no count entry at all
    pub missing_node_rate: f64,
    /// Probability that a single count is missing
    pub missing_count_rate: f64,
}

impl Default for RandomDatasetSpec {
    fn default() -> Self {
        Self {
            samples: 6,
            nodes_per_classification: 40,
            classifications: vec![TAXONOMY.to_string(), "SEED".to_string()],
            max_count: 50,
            missing_node_rate: 0.1,
            missing_count_rate: 0.05,
        }
    }
}

/// Deterministic random dataset.
///
/// Every tree is rooted at 1 and has the three sentinel categories hanging off
/// the root, each with a child of its own. Regular nodes get ids from 2 upward
/// and attach to a uniformly chosen earlier regular node.
pub fn random_dataset(seed: u64, spec: &RandomDatasetSpec) -> BiomeDataset {
    let mut rng = StdRng::seed_from_u64(seed);
    let samples: Vec<String> = (0..spec.samples).map(|i| format!("sample_{}", i)).collect();
    let mut dataset = BiomeDataset::new(samples);

    for name in &spec.classifications {
        let mut edges = Vec::new();
        let mut regular = vec![ClassId(1)];
        for id in 2..(spec.nodes_per_classification as i32 + 2) {
            let parent = regular[rng.gen_range(0..regular.len())];
            edges.push((parent, ClassId(id)));
            regular.push(ClassId(id));
        }

        let hidden_base = spec.nodes_per_classification as i32 + 100;
        for (offset, sentinel) in ClassId::SENTINELS.iter().enumerate() {
            edges.push((ClassId(1), *sentinel));
            edges.push((*sentinel, ClassId(hidden_base + offset as i32)));
        }

        let tree = ClassificationTree::from_edges(ClassId(1), edges)
            .expect("generated tree is well formed");

        let mut counts = CountTable::new(spec.samples);
        let all_ids = regular
            .iter()
            .copied()
            .chain(ClassId::SENTINELS)
            .chain((0..3).map(|offset| ClassId(hidden_base + offset)));
        for id in all_ids {
            if rng.gen_bool(spec.missing_node_rate) {
                continue;
            }
            let values = (0..spec.samples)
                .map(|_| {
                    if rng.gen_bool(spec.missing_count_rate) {
                        None
                    } else {
                        Some(rng.gen_range(0..=spec.max_count))
                    }
                })
                .collect();
            counts
                .insert(id, values)
                .expect("generated counts match the sample count");
        }

        dataset
            .add_classification(name.clone(), tree, counts)
            .expect("generated classification names are unique");
    }

    dataset
}

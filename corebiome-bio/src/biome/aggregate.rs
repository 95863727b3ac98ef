/// Bottom-up prevalence filter over one classification tree
use super::DetectionThresholds;
use crate::classification::{ClassificationTree, CountTable};
use corebiome_core::{BiomeError, BiomeMode, BiomeResult, ClassId, SampleSelection};
use petgraph::graph::NodeIndex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Kept nodes of one classification mapped to their own read count over the
/// selected samples
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OutputTable {
    entries: BTreeMap<ClassId, u64>,
}

impl OutputTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: ClassId, value: u64) {
        self.entries.insert(id, value);
    }

    pub fn get(&self, id: ClassId) -> Option<u64> {
        self.entries.get(&id).copied()
    }

    pub fn contains(&self, id: ClassId) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ClassId, u64)> + '_ {
        self.entries.iter().map(|(id, value)| (*id, *value))
    }

    pub fn class_ids(&self) -> Vec<ClassId> {
        self.entries.keys().copied().collect()
    }

    /// Sum of values over entries with a non-negative class id
    pub fn reportable_total(&self) -> u64 {
        self.entries
            .iter()
            .filter(|(id, _)| id.is_reportable())
            .map(|(_, value)| *value)
            .sum()
    }

    /// The result as a single-sample count table, `class id -> [value]`
    pub fn to_class_counts(&self) -> BTreeMap<ClassId, Vec<u64>> {
        self.entries
            .iter()
            .map(|(id, value)| (*id, vec![*value]))
            .collect()
    }
}

/// What the walk decided for one non-sentinel node
#[derive(Debug, Clone, Copy)]
pub struct BiomeVisit<'w> {
    pub class_id: ClassId,
    /// Own plus descendant counts, zero outside the selection
    pub summarized: &'w [u64],
    pub samples_with_class: usize,
    /// Own counts over the selected samples
    pub own_value: u64,
    pub kept: bool,
}

struct Frame {
    node: NodeIndex,
    children: Vec<NodeIndex>,
    next_child: usize,
    summarized: Vec<u64>,
}

pub struct CoreBiomeAggregator<'a> {
    tree: &'a ClassificationTree,
    counts: &'a CountTable,
    selection: &'a SampleSelection,
    thresholds: &'a DetectionThresholds,
    mode: BiomeMode,
    samples_threshold: usize,
}

impl<'a> CoreBiomeAggregator<'a> {
    /// All per-sample inputs must be defined over the same number of samples
    pub fn new(
        tree: &'a ClassificationTree,
        counts: &'a CountTable,
        selection: &'a SampleSelection,
        thresholds: &'a DetectionThresholds,
        mode: BiomeMode,
        samples_threshold: usize,
    ) -> BiomeResult<Self> {
        let number_of_samples = counts.number_of_samples();
        if selection.number_of_samples() != number_of_samples {
            return Err(BiomeError::sample_mismatch(
                "sample selection",
                number_of_samples,
                selection.number_of_samples(),
            ));
        }
        if thresholds.len() != number_of_samples {
            return Err(BiomeError::sample_mismatch(
                "detection thresholds",
                number_of_samples,
                thresholds.len(),
            ));
        }

        Ok(Self {
            tree,
            counts,
            selection,
            thresholds,
            mode,
            samples_threshold,
        })
    }

    pub fn number_of_samples(&self) -> usize {
        self.counts.number_of_samples()
    }

    /// Nodes passing the prevalence filter. Empty when no sample is selected.
    pub fn aggregate(&self) -> OutputTable {
        let mut table = OutputTable::new();
        if self.selection.is_empty() {
            return table;
        }

        self.walk(|visit| {
            if visit.kept {
                table.insert(visit.class_id, visit.own_value);
            }
        });
        table
    }

    /// Post-order walk from the root, reporting every non-sentinel node to
    /// `visit`. Sentinel nodes and everything below them are skipped and add
    /// nothing to their parent. Returns the root's summarized counts.
    pub fn walk<F>(&self, mut visit: F) -> Vec<u64>
    where
        F: FnMut(&BiomeVisit<'_>),
    {
        let mut root_summary = vec![0u64; self.number_of_samples()];
        let mut stack: Vec<Frame> = self.open(self.tree.root()).into_iter().collect();

        loop {
            let Some(frame) = stack.last_mut() else {
                break;
            };
            if let Some(&child) = frame.children.get(frame.next_child) {
                frame.next_child += 1;
                if let Some(child_frame) = self.open(child) {
                    stack.push(child_frame);
                }
                continue;
            }

            let Some(done) = stack.pop() else {
                break;
            };
            self.close(&done, &mut visit);

            match stack.last_mut() {
                Some(parent) => {
                    for sample in self.selection.iter() {
                        parent.summarized[sample] += done.summarized[sample];
                    }
                }
                None => root_summary = done.summarized,
            }
        }

        root_summary
    }

    /// Start a node: seed its summary with its own selected counts.
    /// Sentinels are not opened at all.
    fn open(&self, node: NodeIndex) -> Option<Frame> {
        let id = self.tree.class_id(node);
        if id.is_sentinel() {
            return None;
        }

        let mut summarized = vec![0u64; self.number_of_samples()];
        for sample in self.selection.iter() {
            summarized[sample] = self.counts.own_count(id, sample);
        }

        Some(Frame {
            node,
            children: self.tree.children(node),
            next_child: 0,
            summarized,
        })
    }

    fn close<F>(&self, frame: &Frame, visit: &mut F)
    where
        F: FnMut(&BiomeVisit<'_>),
    {
        let id = self.tree.class_id(frame.node);
        let thresholds = self.thresholds.as_slice();

        let samples_with_class = self
            .selection
            .iter()
            .filter(|&sample| frame.summarized[sample] >= thresholds[sample])
            .count();
        let own_value: u64 = self
            .selection
            .iter()
            .map(|sample| self.counts.own_count(id, sample))
            .sum();
        let kept = self.counts.contains(id)
            && self.mode.keeps(samples_with_class, self.samples_threshold);

        visit(&BiomeVisit {
            class_id: id,
            summarized: &frame.summarized,
            samples_with_class,
            own_value,
            kept,
        });
    }
}

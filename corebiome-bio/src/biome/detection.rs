/// Per-sample minimum read counts for a node to count as detected
use crate::classification::CountTable;
use corebiome_core::{BiomeError, BiomeResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One threshold per sample, every entry at least 1
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DetectionThresholds(Vec<u64>);

impl DetectionThresholds {
    /// A single read suffices in every sample
    pub fn minimal(number_of_samples: usize) -> Self {
        Self(vec![1; number_of_samples])
    }

    /// Thresholds as `percent` of each sample's classified read yield.
    ///
    /// The yield of a sample is the sum of the own counts of every node with a
    /// positive class id. Ancestors and descendants are both added, so reads a
    /// classifier also rolls up into parents are counted once per level they
    /// appear at. A percent of zero or below gives `minimal`.
    pub fn compute(
        number_of_samples: usize,
        counts: &CountTable,
        percent: f32,
    ) -> BiomeResult<Self> {
        if counts.number_of_samples() != number_of_samples {
            return Err(BiomeError::sample_mismatch(
                "detection threshold counts",
                number_of_samples,
                counts.number_of_samples(),
            ));
        }

        if percent.is_nan() || percent <= 0.0 {
            return Ok(Self::minimal(number_of_samples));
        }

        let mut totals = vec![0u64; number_of_samples];
        for (id, sample_counts) in counts.iter() {
            if !id.is_classified() {
                continue;
            }
            for (total, count) in totals.iter_mut().zip(sample_counts) {
                *total += count.map_or(0, u64::from);
            }
        }

        let fraction = f64::from(percent) / 100.0;
        let thresholds: Vec<u64> = totals
            .into_iter()
            .map(|total| ((total as f64 * fraction) as u64).max(1))
            .collect();

        debug!(
            "Read detection thresholds: {}",
            thresholds
                .iter()
                .map(u64::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        );

        Ok(Self(thresholds))
    }

    pub fn get(&self, sample: usize) -> Option<u64> {
        self.0.get(sample).copied()
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

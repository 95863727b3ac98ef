/// Per-node, per-sample raw read counts for one classification
use corebiome_core::{BiomeError, BiomeResult, ClassId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountTable {
    number_of_samples: usize,
    /// `None` entries are missing counts and read as zero
    counts: BTreeMap<ClassId, Vec<Option<u32>>>,
}

impl CountTable {
    pub fn new(number_of_samples: usize) -> Self {
        Self {
            number_of_samples,
            counts: BTreeMap::new(),
        }
    }

    /// Set the count vector of a class, replacing any previous one.
    ///
    /// The vector must have exactly one entry per sample.
    pub fn insert(&mut self, id: ClassId, counts: Vec<Option<u32>>) -> BiomeResult<()> {
        if counts.len() != self.number_of_samples {
            return Err(BiomeError::sample_mismatch(
                format!("counts of class {}", id),
                self.number_of_samples,
                counts.len(),
            ));
        }
        self.counts.insert(id, counts);
        Ok(())
    }

    /// Same as `insert` for a vector without missing entries
    pub fn insert_counts(&mut self, id: ClassId, counts: &[u32]) -> BiomeResult<()> {
        self.insert(id, counts.iter().copied().map(Some).collect())
    }

    pub fn with_counts(mut self, id: impl Into<ClassId>, counts: &[u32]) -> BiomeResult<Self> {
        self.insert_counts(id.into(), counts)?;
        Ok(self)
    }

    pub fn get(&self, id: ClassId) -> Option<&[Option<u32>]> {
        self.counts.get(&id).map(Vec::as_slice)
    }

    pub fn contains(&self, id: ClassId) -> bool {
        self.counts.contains_key(&id)
    }

    /// Raw count of `id` in `sample`, zero when absent
    pub fn own_count(&self, id: ClassId, sample: usize) -> u64 {
        self.counts
            .get(&id)
            .and_then(|counts| counts.get(sample).copied().flatten())
            .map_or(0, u64::from)
    }

    pub fn number_of_samples(&self) -> usize {
        self.number_of_samples
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ClassId, &[Option<u32>])> {
        self.counts.iter().map(|(id, counts)| (*id, counts.as_slice()))
    }

    /// Re-check vector lengths, e.g. after deserialization
    pub fn validate(&self) -> BiomeResult<()> {
        for (id, counts) in &self.counts {
            if counts.len() != self.number_of_samples {
                return Err(BiomeError::sample_mismatch(
                    format!("counts of class {}", id),
                    self.number_of_samples,
                    counts.len(),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_entries_read_as_zero() {
        let mut table = CountTable::new(3);
        table.insert(ClassId(5), vec![Some(4), None, Some(1)]).unwrap();

        assert_eq!(table.own_count(ClassId(5), 0), 4);
        assert_eq!(table.own_count(ClassId(5), 1), 0);
        assert_eq!(table.own_count(ClassId(5), 2), 1);
        assert_eq!(table.own_count(ClassId(6), 0), 0);
        assert!(!table.contains(ClassId(6)));
    }

    #[test]
    fn test_length_mismatch_fails_fast() {
        let mut table = CountTable::new(2);
        let err = table.insert_counts(ClassId(1), &[1, 2, 3]).unwrap_err();

        match err {
            BiomeError::SampleCountMismatch {
                expected, actual, ..
            } => {
                assert_eq!(expected, 2);
                assert_eq!(actual, 3);
            }
            _ => panic!("Expected SampleCountMismatch"),
        }
        assert!(table.is_empty());
    }

    #[test]
    fn test_validate_after_deserialize() {
        let json = r#"{"number_of_samples": 2, "counts": {"10": [5, null], "11": [1]}}"#;
        let table: CountTable = serde_json::from_str(json).unwrap();

        assert_eq!(table.get(ClassId(10)), Some(&[Some(5), None][..]));
        assert!(table.validate().is_err());
    }
}

/// Bit-indexed subset of the samples taking part in a computation
use crate::error::{BiomeError, BiomeResult};
use bit_vec::BitVec;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleSelection {
    bits: BitVec,
}

impl SampleSelection {
    /// Empty selection over `number_of_samples` samples
    pub fn none(number_of_samples: usize) -> Self {
        Self {
            bits: BitVec::from_elem(number_of_samples, false),
        }
    }

    /// Every sample selected
    pub fn all(number_of_samples: usize) -> Self {
        Self {
            bits: BitVec::from_elem(number_of_samples, true),
        }
    }

    /// Select the given 0-based sample indices.
    ///
    /// Indices past the end are a caller error; repeated indices are ignored.
    pub fn from_indices<I>(number_of_samples: usize, indices: I) -> BiomeResult<Self>
    where
        I: IntoIterator<Item = usize>,
    {
        let mut selection = Self::none(number_of_samples);
        for index in indices {
            selection.insert(index)?;
        }
        Ok(selection)
    }

    pub fn insert(&mut self, index: usize) -> BiomeResult<()> {
        if index >= self.bits.len() {
            return Err(BiomeError::SampleIndexOutOfRange {
                index,
                number_of_samples: self.bits.len(),
            });
        }
        self.bits.set(index, true);
        Ok(())
    }

    pub fn contains(&self, index: usize) -> bool {
        self.bits.get(index).unwrap_or(false)
    }

    /// Total number of samples the selection is defined over
    pub fn number_of_samples(&self) -> usize {
        self.bits.len()
    }

    /// Number of selected samples
    pub fn cardinality(&self) -> usize {
        self.bits.iter().filter(|selected| *selected).count()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.none()
    }

    /// Selected indices in ascending order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits
            .iter()
            .enumerate()
            .filter_map(|(index, selected)| selected.then_some(index))
    }
}

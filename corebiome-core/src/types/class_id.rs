/// Classification node identifiers
use serde::{Deserialize, Serialize};
use std::fmt;

/// Class ID type - newtype over the integer id carried by every classification node
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct ClassId(pub i32);

impl ClassId {
    /// Reads without any hit
    pub const NO_HITS: Self = Self(-1);
    /// Reads with hits that could not be assigned
    pub const UNASSIGNED: Self = Self(-2);
    /// Low-complexity or otherwise ambiguous reads
    pub const LOW_COMPLEXITY: Self = Self(-3);

    pub const SENTINELS: [Self; 3] = [Self::NO_HITS, Self::UNASSIGNED, Self::LOW_COMPLEXITY];

    pub fn new(id: i32) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i32 {
        self.0
    }

    /// Reserved "unassigned / no-hit / ambiguous" categories. These nodes are
    /// never expanded and never reported.
    pub fn is_sentinel(&self) -> bool {
        Self::SENTINELS.contains(self)
    }

    /// Strictly positive ids; only these feed the per-sample read yield
    pub fn is_classified(&self) -> bool {
        self.0 > 0
    }

    /// Non-negative ids; only these count towards the biome size
    pub fn is_reportable(&self) -> bool {
        self.0 >= 0
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for ClassId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl From<ClassId> for i32 {
    fn from(id: ClassId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinels() {
        assert!(ClassId(-1).is_sentinel());
        assert!(ClassId(-2).is_sentinel());
        assert!(ClassId(-3).is_sentinel());
        assert!(!ClassId(-4).is_sentinel());
        assert!(!ClassId(0).is_sentinel());
        assert!(!ClassId(1).is_sentinel());
    }

    #[test]
    fn test_classified_and_reportable() {
        // Zero is reportable but does not contribute to read yield
        assert!(ClassId(0).is_reportable());
        assert!(!ClassId(0).is_classified());

        assert!(ClassId(562).is_classified());
        assert!(!ClassId::NO_HITS.is_reportable());
        assert!(!ClassId(-4).is_reportable());
    }

    #[test]
    fn test_serde_transparent() {
        let json = serde_json::to_string(&ClassId(42)).unwrap();
        assert_eq!(json, "42");
        let back: ClassId = serde_json::from_str("-2").unwrap();
        assert_eq!(back, ClassId::UNASSIGNED);
    }
}

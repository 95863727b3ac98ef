//! Custom assertions for testing
//!
//! Checks on biome output tables and detection thresholds.

use corebiome_bio::{DetectionThresholds, OutputTable};
use corebiome_core::ClassId;

/// Assert that a table holds exactly the given `(class id, own value)` entries
pub fn assert_kept_exactly(table: &OutputTable, expected: &[(i32, u64)]) {
    let actual: Vec<(i32, u64)> = table.iter().map(|(id, value)| (id.value(), value)).collect();
    let mut expected = expected.to_vec();
    expected.sort_unstable();

    assert_eq!(
        actual, expected,
        "Kept classes differ: got {:?}, expected {:?}",
        actual, expected
    );
}

/// Assert that no sentinel class made it into a table
pub fn assert_no_sentinels(table: &OutputTable) {
    for sentinel in ClassId::SENTINELS {
        assert!(
            !table.contains(sentinel),
            "Sentinel class {} found in output table",
            sentinel
        );
    }
}

/// Assert that every threshold is at least one read
pub fn assert_thresholds_floor(thresholds: &DetectionThresholds) {
    for (sample, &threshold) in thresholds.as_slice().iter().enumerate() {
        assert!(
            threshold >= 1,
            "Detection threshold of sample {} is {}, expected at least 1",
            sample,
            threshold
        );
    }
}

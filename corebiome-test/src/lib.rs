//! Test utilities for the corebiome workspace
//!
//! Common fixtures, dataset builders and assertions shared by the integration
//! tests of the workspace crates.
//!
//! # Features
//!
//! - **Fixtures**: the two-sample chain scenario, a fluent `DatasetBuilder`
//!   and seeded random datasets
//! - **Environment**: temporary directories holding dataset and config files
//! - **Assertions**: checks on output tables and detection thresholds

pub mod assertions;
pub mod environment;
pub mod fixtures;

// Re-export commonly used items
pub use assertions::{assert_kept_exactly, assert_no_sentinels, assert_thresholds_floor};
pub use environment::TestEnvironment;
pub use fixtures::{chain_scenario, random_dataset, DatasetBuilder, RandomDatasetSpec};

// Re-export test dependencies for convenience
pub use anyhow::{Context, Result};
pub use tempfile;

/// Initialize test logging (safe to call from every test)
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}

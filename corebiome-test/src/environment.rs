//! Isolated test environments
//!
//! Each environment owns a temporary directory that is removed on drop.

use anyhow::{Context, Result};
use corebiome_bio::BiomeDataset;
use corebiome_core::{save_config, Config};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestEnvironment {
    dir: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let dir = TempDir::new().context("Failed to create temporary directory")?;
        Ok(Self { dir })
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write a dataset as JSON and return its path
    pub fn write_dataset(&self, name: &str, dataset: &BiomeDataset) -> Result<PathBuf> {
        let path = self.dir.path().join(name);
        dataset
            .save_json(&path)
            .with_context(|| format!("Failed to write dataset {}", path.display()))?;
        Ok(path)
    }

    /// Write a TOML config and return its path
    pub fn write_config(&self, name: &str, config: &Config) -> Result<PathBuf> {
        let path = self.dir.path().join(name);
        save_config(&path, config)
            .with_context(|| format!("Failed to write config {}", path.display()))?;
        Ok(path)
    }

    /// Write arbitrary file contents and return the path
    pub fn write_file(&self, name: &str, contents: &str) -> Result<PathBuf> {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents)?;
        Ok(path)
    }
}

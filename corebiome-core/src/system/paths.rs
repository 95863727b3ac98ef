use std::path::PathBuf;
use std::sync::OnceLock;

// Cache the paths to avoid repeated environment lookups
static COREBIOME_HOME: OnceLock<PathBuf> = OnceLock::new();

/// Get the corebiome home directory
/// Checks COREBIOME_HOME environment variable, falls back to ${HOME}/.corebiome
pub fn corebiome_home() -> PathBuf {
    COREBIOME_HOME
        .get_or_init(|| {
            if let Ok(path) = std::env::var("COREBIOME_HOME") {
                PathBuf::from(path)
            } else {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(".corebiome")
            }
        })
        .clone()
}

/// Location of the user config file, `${COREBIOME_HOME}/config.toml`
pub fn default_config_path() -> PathBuf {
    corebiome_home().join("config.toml")
}

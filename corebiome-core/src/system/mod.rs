pub mod paths;

pub use paths::{corebiome_home, default_config_path};

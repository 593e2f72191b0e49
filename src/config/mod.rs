//! Configuration module
//!
//! Loads and validates the `config.json` file that drives note generation.

mod types;

pub use types::Config;

use crate::error::ConfigError;
use std::fs;
use std::path::Path;

/// Config file name, relative to the working directory
pub const CONFIG_FILE: &str = "config.json";

/// Load configuration from a JSON file
pub fn load(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let config: Config = serde_json::from_slice(&content)?;
    validate(&config)?;

    Ok(config)
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.output_folder.is_empty() {
        return Err(ConfigError::EmptyOutputFolder);
    }
    Ok(())
}

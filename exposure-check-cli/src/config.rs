//! Configuration file loading.
//!
//! `config.toml` holds a [`CheckConfig`]; missing fields use defaults and a
//! missing default file is not an error.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use exposure_check_core::CheckConfig;

const APP_DIR: &str = "exposure-check";
const CONFIG_FILE: &str = "config.toml";

/// `<platform config dir>/exposure-check/config.toml`, if the platform has one.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

/// Load configuration.
///
/// An explicitly given path must exist. Without one, the default location is
/// tried and defaults are used when nothing is there.
pub fn load_config(explicit: Option<&Path>) -> Result<CheckConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match default_config_path() {
            Some(path) if path.exists() => path,
            _ => {
                tracing::debug!("No config file, using defaults");
                return Ok(CheckConfig::default());
            }
        },
    };

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config = toml::from_str(&content)
        .with_context(|| format!("Invalid config at {}", path.display()))?;
    tracing::debug!("Loaded config from {}", path.display());
    Ok(config)
}

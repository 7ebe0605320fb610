//! Generic TOML configuration parsing with file path context.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::path::Path;

use crate::core::DepsError;

/// Parse a TOML configuration file into `T`.
///
/// # Errors
///
/// Returns an error if the file cannot be read, or a [`DepsError::ConfigError`]
/// if its contents do not match `T`.
pub fn parse_config<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    toml::from_str(&content)
        .map_err(|e| DepsError::ConfigError {
            message: format!("{}: {}", path.display(), e.message()),
        })
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

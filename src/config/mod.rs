//! Project configuration for depcache
//!
//! Configuration is read from `depcache.toml` at the project root, or from the
//! file given with `--config`. Every field is optional:
//!
//! ```toml
//! # Extensions of resource record files inside a collection directory
//! resource_extensions = ["yaml", "yml"]
//!
//! # Collections used when a command is given none explicitly
//! collections = ["post", "page"]
//!
//! # How a changed-file path is mapped onto the content root:
//! # "first-segment" drops everything up to the first '/',
//! # "collection-dir" drops the collection directory only when it is the prefix
//! lookup_prefix = "first-segment"
//! ```
//!
//! A missing file means defaults.

pub mod parser;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::index::LookupPrefix;
pub use parser::parse_config;

/// Name of the project configuration file looked up at the root.
pub const CONFIG_FILE_NAME: &str = "depcache.toml";

fn default_resource_extensions() -> Vec<String> {
    vec!["yaml".to_string()]
}

/// Settings shared by every collection of a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DepsConfig {
    /// File extensions of resource records (without the dot)
    #[serde(default = "default_resource_extensions")]
    pub resource_extensions: Vec<String>,

    /// Collections used when a command names none
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub collections: Vec<String>,

    /// Prefix stripping policy for reverse lookups
    #[serde(default)]
    pub lookup_prefix: LookupPrefix,
}

impl Default for DepsConfig {
    fn default() -> Self {
        Self {
            resource_extensions: default_resource_extensions(),
            collections: Vec::new(),
            lookup_prefix: LookupPrefix::default(),
        }
    }
}

impl DepsConfig {
    /// Default config file location for a project root.
    #[must_use]
    pub fn default_path(root: &Path) -> PathBuf {
        root.join(CONFIG_FILE_NAME)
    }

    /// Load configuration for `root`.
    ///
    /// An explicit `path` must exist; the default `depcache.toml` is optional.
    ///
    /// # Errors
    ///
    /// Returns an error if the chosen file cannot be read or parsed.
    pub fn load(root: &Path, path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => {
                let default_path = Self::default_path(root);
                if default_path.is_file() {
                    Self::load_from(&default_path)
                } else {
                    tracing::debug!("No {} at {}, using defaults", CONFIG_FILE_NAME, root.display());
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config: Self = parse_config(path)?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }
}

//! Collection naming and storage layout.
//!
//! A collection named `post` lives in `<root>/posts/`:
//!
//! ```text
//! posts/
//! ├── introduction.yaml        resource records
//! ├── introduction2.yaml
//! ├── files/                   referenced content (not scanned)
//! └── post.dependencies        dependency cache
//! ```

use glob::{MatchOptions, Pattern, glob_with};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::core::DepsError;
use crate::utils::platform::normalize_path_for_storage;

/// File extension of the per-collection dependency cache.
pub const CACHE_EXTENSION: &str = "dependencies";

/// A named group of resources sharing a storage directory and one cache file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Collection {
    name: String,
}

impl Collection {
    /// Create a collection handle, validating the name.
    ///
    /// # Errors
    ///
    /// Returns [`DepsError::InvalidCollectionName`] for empty names, names
    /// with surrounding whitespace or path separators, and `.`/`..`.
    pub fn new(name: impl Into<String>) -> Result<Self, DepsError> {
        let name = name.into();
        let valid = !name.is_empty()
            && name.trim() == name
            && !name.contains(['/', '\\'])
            && name != "."
            && name != "..";
        if !valid {
            return Err(DepsError::InvalidCollectionName {
                name,
            });
        }
        Ok(Self {
            name,
        })
    }

    /// Singular collection name, e.g. `post`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the storage directory, e.g. `posts`.
    #[must_use]
    pub fn dir_name(&self) -> String {
        format!("{}s", self.name)
    }

    /// Storage directory below `root`.
    #[must_use]
    pub fn directory(&self, root: &Path) -> PathBuf {
        root.join(self.dir_name())
    }

    /// Cache file path below `root`, e.g. `posts/post.dependencies`.
    #[must_use]
    pub fn cache_path(&self, root: &Path) -> PathBuf {
        self.directory(root).join(format!("{}.{CACHE_EXTENSION}", self.name))
    }

    /// Enumerate resource records directly inside the collection directory.
    ///
    /// Returned paths are root-relative, `/`-separated and sorted. A missing
    /// directory yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`DepsError::ResourceEnumeration`] if a glob pattern is invalid.
    /// Unreadable entries are logged and skipped.
    pub fn resources(&self, root: &Path, extensions: &[String]) -> Result<Vec<String>, DepsError> {
        let directory = self.directory(root);
        let escaped_dir = Pattern::escape(&directory.to_string_lossy());
        let options = MatchOptions {
            case_sensitive: true,
            require_literal_separator: true,
            require_literal_leading_dot: true,
        };

        let mut resources = Vec::new();
        for extension in extensions {
            let extension = extension.trim_start_matches('.');
            let pattern = format!("{escaped_dir}/*.{}", Pattern::escape(extension));

            let entries = glob_with(&pattern, options).map_err(|e| DepsError::ResourceEnumeration {
                pattern: pattern.clone(),
                reason: e.to_string(),
            })?;

            for entry in entries {
                match entry {
                    Ok(path) if path.is_file() => {
                        let relative = path.strip_prefix(root).unwrap_or(&path);
                        resources.push(normalize_path_for_storage(relative));
                    }
                    Ok(_) => {}
                    Err(e) => tracing::warn!("Skipping unreadable entry in {}: {e}", directory.display()),
                }
            }
        }

        resources.sort();
        resources.dedup();
        Ok(resources)
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

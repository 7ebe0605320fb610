//! Per-collection dependency cache persistence.
//!
//! Each collection keeps its [`DependencyIndex`] in a YAML file next to its
//! resource records (`posts/post.dependencies` for the `post` collection).
//! [`CacheStore`] loads that file and, when it is absent or cannot be decoded,
//! rebuilds the index from the resource records with [`CacheBuilder`] and
//! writes it back.
//!
//! # Load Policy
//!
//! | Cache file state            | Result                                   |
//! |-----------------------------|------------------------------------------|
//! | decodes as an index         | returned as-is, even if resources changed |
//! | missing                     | rebuilt, persisted                       |
//! | unreadable / corrupt / empty | reported, rebuilt, persisted            |
//!
//! Rebuilt indexes are only written when the collection directory exists.
//!
//! A loaded cache is never cross-checked against the live resource set; use
//! [`CacheStore::invalidate`] or [`CacheBuilder::build`] after editing
//! resources.
//!
//! Only one process is expected to own a collection's cache file at a time.
//! Writes are atomic, but concurrent rebuilds from several processes may race
//! and the last writer wins.
//!
//! # Examples
//!
//! ```rust,no_run
//! use depcache::cache::CacheStore;
//! use depcache::collection::Collection;
//! use depcache::config::DepsConfig;
//!
//! # fn example() -> anyhow::Result<()> {
//! let store = CacheStore::new(".", DepsConfig::default());
//! let post = Collection::new("post")?;
//!
//! let index = store.load(&post);
//! println!("{} resources indexed", index.len());
//! # Ok(())
//! # }
//! ```

pub mod builder;

pub use builder::{BuildReport, CacheBuilder};

use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::collection::Collection;
use crate::config::DepsConfig;
use crate::core::DepsError;
use crate::index::DependencyIndex;
use crate::utils::fs::atomic_write;

/// Where a loaded index came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexOrigin {
    /// Decoded from the cache file
    Cache,
    /// Rebuilt because the cache file did not exist
    RebuiltMissing,
    /// Rebuilt because the cache file could not be read or decoded
    RebuiltCorrupt,
    /// Rebuilt on request, ignoring any cache file
    Rebuilt,
}

impl fmt::Display for IndexOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cache => f.write_str("loaded from cache"),
            Self::RebuiltMissing => f.write_str("built (no cache file)"),
            Self::RebuiltCorrupt => f.write_str("rebuilt (cache file unreadable)"),
            Self::Rebuilt => f.write_str("rebuilt"),
        }
    }
}

/// Loads and saves dependency caches below a project root.
#[derive(Debug, Clone)]
pub struct CacheStore {
    root: PathBuf,
    config: DepsConfig,
}

impl CacheStore {
    /// Create a store for the project at `root`.
    pub fn new(root: impl Into<PathBuf>, config: DepsConfig) -> Self {
        Self {
            root: root.into(),
            config,
        }
    }

    /// Project root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &DepsConfig {
        &self.config
    }

    /// Canonical cache file path of `collection`.
    #[must_use]
    pub fn cache_path(&self, collection: &Collection) -> PathBuf {
        collection.cache_path(&self.root)
    }

    /// A builder that persists through this store.
    #[must_use]
    pub fn builder(&self) -> CacheBuilder<'_> {
        CacheBuilder::new(self)
    }

    /// Decode the cache file of `collection` without falling back.
    ///
    /// Returns `Ok(None)` when no cache file exists.
    ///
    /// # Errors
    ///
    /// Returns [`DepsError::CacheRead`] when the file cannot be read and
    /// [`DepsError::CacheParse`] when it is empty or not a valid index.
    pub fn try_load(&self, collection: &Collection) -> Result<Option<DependencyIndex>, DepsError> {
        let path = self.cache_path(collection);

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(DepsError::CacheRead {
                    path: path.display().to_string(),
                    source,
                });
            }
        };

        if content.trim().is_empty() {
            return Err(DepsError::CacheParse {
                path: path.display().to_string(),
                reason: "cache file is empty".to_string(),
            });
        }

        serde_yaml::from_str(&content).map(Some).map_err(|e| DepsError::CacheParse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Load the index of `collection`, rebuilding it when necessary.
    ///
    /// Never fails: decode problems are reported and answered with a rebuild.
    #[must_use]
    pub fn load(&self, collection: &Collection) -> DependencyIndex {
        self.load_with_origin(collection).0
    }

    /// Like [`load`](Self::load), also reporting where the index came from.
    #[must_use]
    pub fn load_with_origin(&self, collection: &Collection) -> (DependencyIndex, IndexOrigin) {
        let origin = match self.try_load(collection) {
            Ok(Some(index)) => {
                tracing::debug!(
                    "Loaded dependency cache for '{}' ({} resources)",
                    collection,
                    index.len()
                );
                return (index, IndexOrigin::Cache);
            }
            Ok(None) => {
                tracing::info!("No dependency cache for '{}', building one", collection);
                IndexOrigin::RebuiltMissing
            }
            Err(error) => {
                tracing::warn!("{error}; rebuilding");
                IndexOrigin::RebuiltCorrupt
            }
        };

        (self.builder().build(collection), origin)
    }

    /// Serialize `index` to the cache file of `collection`, overwriting it.
    ///
    /// # Errors
    ///
    /// Returns [`DepsError::CacheWrite`] if serialization or the write fails.
    pub fn save(&self, collection: &Collection, index: &DependencyIndex) -> Result<(), DepsError> {
        let path = self.cache_path(collection);
        let write_error = |reason: String| DepsError::CacheWrite {
            path: path.display().to_string(),
            reason,
        };

        let content = serde_yaml::to_string(index).map_err(|e| write_error(e.to_string()))?;
        atomic_write(&path, content.as_bytes()).map_err(|e| write_error(format!("{e:#}")))?;

        tracing::debug!("Wrote dependency cache {}", path.display());
        Ok(())
    }

    /// Delete the cache file of `collection` so the next load rebuilds it.
    ///
    /// Returns whether a file was removed.
    ///
    /// # Errors
    ///
    /// Returns an I/O error other than "not found".
    pub fn invalidate(&self, collection: &Collection) -> std::io::Result<bool> {
        match fs::remove_file(self.cache_path(collection)) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e),
        }
    }
}

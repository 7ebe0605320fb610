//! depcache - reverse-dependency cache for content resources
//!
//! Content collections keep one YAML record per resource (`posts/intro.yaml`)
//! and embed files into fields with reference tags:
//!
//! ```yaml
//! title: Introduction
//! hero: "@file(files/hero.jpeg)"
//! body: "@content(files/intro.md)"
//! ```
//!
//! depcache indexes those references per collection, persists the index next
//! to the records (`posts/post.dependencies`), and answers the question a
//! publishing pipeline asks on every change: *which resources embed this
//! file and must be rebuilt?*
//!
//! # Core Modules
//!
//! - [`reference`] - Parsing `@file(...)` / `@content(...)` tags in field values
//! - [`resource`] - Decoding resource records and collecting their references
//! - [`collection`] - Collection naming, directories, and resource enumeration
//! - [`index`] - The dependency index and reverse lookup
//! - [`cache`] - Loading, rebuilding, and persisting per-collection caches
//! - [`tracker`] - Loaded indexes answering lookups for one or more collections
//!
//! ## Supporting Modules
//!
//! - [`config`] - Project configuration (`depcache.toml`)
//! - [`core`] - Error types and user-facing error formatting
//! - [`utils`] - Atomic writes and path normalization
//! - [`cli`] - The `depcache` command-line interface
//!
//! # Example
//!
//! ```rust,no_run
//! use depcache::cache::CacheStore;
//! use depcache::collection::Collection;
//! use depcache::config::DepsConfig;
//! use depcache::tracker::DependencyTracker;
//! use std::path::Path;
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = DepsConfig::load(Path::new("."), None)?;
//! let store = CacheStore::new(".", config);
//! let tracker = DependencyTracker::load(&store, Collection::new("post")?);
//!
//! assert_eq!(
//!     tracker.find_dependents("posts/files/intro.md"),
//!     vec!["posts/intro.yaml"]
//! );
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod cli;
pub mod collection;
pub mod config;
pub mod core;
pub mod index;
pub mod reference;
pub mod resource;
pub mod tracker;
pub mod utils;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

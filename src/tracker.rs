//! Loaded dependency indexes used for lookups.
//!
//! A [`DependencyTracker`] is the context value a publishing step holds for one
//! collection: it is constructed once (loading or rebuilding the cache) and
//! only answers queries afterwards. [`DependencyTrackers`] groups the trackers
//! of several collections of the same project.
//!
//! # Examples
//!
//! ```rust,no_run
//! use depcache::cache::CacheStore;
//! use depcache::collection::Collection;
//! use depcache::config::DepsConfig;
//! use depcache::tracker::DependencyTracker;
//!
//! # fn example() -> anyhow::Result<()> {
//! let store = CacheStore::new(".", DepsConfig::default());
//! let tracker = DependencyTracker::load(&store, Collection::new("post")?);
//!
//! for resource in tracker.find_dependents("posts/files/md-content.md") {
//!     println!("rebuild {resource}");
//! }
//! # Ok(())
//! # }
//! ```

use std::collections::BTreeSet;

use crate::cache::{BuildReport, CacheStore, IndexOrigin};
use crate::collection::Collection;
use crate::index::{DependencyIndex, LookupPrefix};
use crate::utils::platform::normalize_reference_path;

/// A read-only dependency index for one collection.
#[derive(Debug, Clone)]
pub struct DependencyTracker {
    collection: Collection,
    index: DependencyIndex,
    origin: IndexOrigin,
    lookup_prefix: LookupPrefix,
}

impl DependencyTracker {
    /// Load the collection's cache, rebuilding it if absent or corrupt.
    #[must_use]
    pub fn load(store: &CacheStore, collection: Collection) -> Self {
        let (index, origin) = store.load_with_origin(&collection);
        Self {
            collection,
            index,
            origin,
            lookup_prefix: store.config().lookup_prefix,
        }
    }

    /// Rebuild the collection's index from its resources, ignoring the cache.
    ///
    /// Returns the tracker together with the build summary.
    #[must_use]
    pub fn rebuild(store: &CacheStore, collection: Collection) -> (Self, BuildReport) {
        let report = store.builder().build_report(&collection);
        let tracker = Self {
            collection,
            index: report.index.clone(),
            origin: IndexOrigin::Rebuilt,
            lookup_prefix: store.config().lookup_prefix,
        };
        (tracker, report)
    }

    /// Wrap an index that is already in memory.
    #[must_use]
    pub fn from_index(collection: Collection, index: DependencyIndex, lookup_prefix: LookupPrefix) -> Self {
        Self {
            collection,
            index,
            origin: IndexOrigin::Cache,
            lookup_prefix,
        }
    }

    /// Tracked collection.
    #[must_use]
    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    /// The loaded index.
    #[must_use]
    pub fn index(&self) -> &DependencyIndex {
        &self.index
    }

    /// Where the index came from.
    #[must_use]
    pub fn origin(&self) -> IndexOrigin {
        self.origin
    }

    /// Whether `changed_file` lives under this collection's directory.
    #[must_use]
    pub fn owns(&self, changed_file: &str) -> bool {
        let normalized = normalize_reference_path(changed_file);
        normalized.split('/').next() == Some(self.collection.dir_name().as_str())
    }

    /// Resources that depend on `changed_file` (repository-root-relative).
    #[must_use]
    pub fn find_dependents(&self, changed_file: &str) -> Vec<String> {
        self.index
            .find_dependents(changed_file, self.lookup_prefix, &self.collection.dir_name())
    }

    /// Resources that depend on any of `changed_files`, each listed once.
    #[must_use]
    pub fn find_dependents_of_many<S: AsRef<str>>(&self, changed_files: &[S]) -> Vec<String> {
        self.index
            .find_dependents_of_many(changed_files, self.lookup_prefix, &self.collection.dir_name())
    }

    /// References recorded for `resource`.
    #[must_use]
    pub fn references_of(&self, resource: &str) -> Option<&[String]> {
        self.index.references_of(resource)
    }
}

/// Trackers for several collections of one project.
#[derive(Debug, Clone, Default)]
pub struct DependencyTrackers {
    trackers: Vec<DependencyTracker>,
}

impl DependencyTrackers {
    /// Load a tracker for every collection.
    #[must_use]
    pub fn load_all(store: &CacheStore, collections: impl IntoIterator<Item = Collection>) -> Self {
        collections
            .into_iter()
            .map(|collection| DependencyTracker::load(store, collection))
            .collect()
    }

    /// Iterate the trackers in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &DependencyTracker> {
        self.trackers.iter()
    }

    /// Number of trackers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.trackers.len()
    }

    /// Whether no collection is tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trackers.is_empty()
    }

    /// Resources in any tracked collection that depend on `changed_file`.
    ///
    /// When the file's first segment names a tracked collection directory,
    /// only that collection is searched; otherwise all are.
    #[must_use]
    pub fn find_dependents(&self, changed_file: &str) -> Vec<String> {
        self.find_dependents_of_many(&[changed_file])
    }

    /// Union of [`find_dependents`](Self::find_dependents) over several files,
    /// sorted and deduplicated.
    #[must_use]
    pub fn find_dependents_of_many<S: AsRef<str>>(&self, changed_files: &[S]) -> Vec<String> {
        let mut found = BTreeSet::new();
        for file in changed_files {
            let file = file.as_ref();
            let owned = self.trackers.iter().any(|t| t.owns(file));
            for tracker in self.trackers.iter().filter(|t| !owned || t.owns(file)) {
                found.extend(tracker.find_dependents(file));
            }
        }
        found.into_iter().collect()
    }
}

impl FromIterator<DependencyTracker> for DependencyTrackers {
    fn from_iter<I: IntoIterator<Item = DependencyTracker>>(iter: I) -> Self {
        Self {
            trackers: iter.into_iter().collect(),
        }
    }
}

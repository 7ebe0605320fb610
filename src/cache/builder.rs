//! Rebuilding a collection's dependency index from its resource records.

use crate::cache::CacheStore;
use crate::collection::Collection;
use crate::index::DependencyIndex;
use crate::resource::ResourceScanner;

/// Outcome of a full index rebuild.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    /// The freshly built index
    pub index: DependencyIndex,
    /// Resources that could not be read or decoded (indexed with no references)
    pub failed: Vec<String>,
    /// Whether the index was written to the cache file
    pub persisted: bool,
}

/// Scans every resource of a collection and persists the resulting index.
#[derive(Debug)]
pub struct CacheBuilder<'a> {
    store: &'a CacheStore,
    scanner: ResourceScanner,
}

impl<'a> CacheBuilder<'a> {
    /// Create a builder reading resources below the store's root.
    #[must_use]
    pub fn new(store: &'a CacheStore) -> Self {
        Self {
            store,
            scanner: ResourceScanner::new(store.root()),
        }
    }

    /// Rebuild and persist the index of `collection`.
    ///
    /// Always returns an index; failures are reported, not propagated.
    #[must_use]
    pub fn build(&self, collection: &Collection) -> DependencyIndex {
        self.build_report(collection).index
    }

    /// Rebuild and persist the index of `collection`, with a summary.
    ///
    /// Every enumerated resource becomes a key of the index, including
    /// resources with no references and resources that failed to decode.
    /// Nothing is written when the collection directory does not exist.
    #[must_use]
    pub fn build_report(&self, collection: &Collection) -> BuildReport {
        let resources = collection
            .resources(self.store.root(), &self.store.config().resource_extensions)
            .unwrap_or_else(|error| {
                tracing::warn!("{error}");
                Vec::new()
            });

        let mut index = DependencyIndex::new();
        let mut failed = Vec::new();
        for resource in resources {
            let references = match self.scanner.try_scan(&resource) {
                Ok(references) => references,
                Err(error) => {
                    tracing::warn!("{error}");
                    failed.push(resource.clone());
                    Vec::new()
                }
            };
            index.insert(&resource, references);
        }

        tracing::info!(
            "Indexed {} resource(s) of '{}' with {} reference(s)",
            index.len(),
            collection,
            index.reference_count()
        );

        let directory = collection.directory(self.store.root());
        let persisted = if directory.is_dir() {
            match self.store.save(collection, &index) {
                Ok(()) => true,
                Err(error) => {
                    tracing::warn!("{error}");
                    false
                }
            }
        } else {
            tracing::warn!(
                "Collection directory {} does not exist; not writing a cache for '{}'",
                directory.display(),
                collection
            );
            false
        };

        BuildReport {
            index,
            failed,
            persisted,
        }
    }
}

//! The dependency index and reverse lookup.
//!
//! [`DependencyIndex`] maps each resource path to the reference paths it
//! embeds. It serializes as a plain YAML mapping, which is the on-disk format
//! of the cache file:
//!
//! ```yaml
//! posts/introduction.yaml: []
//! posts/introduction2.yaml:
//! - files/md-content.md
//! - files/2.jpeg
//! ```
//!
//! Reverse lookups take a path relative to the repository root (its first
//! segment names the collection directory) and return every resource whose
//! reference list contains the rest of the path.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::utils::platform::{normalize_path_for_storage, normalize_reference_path};

/// How the collection prefix is removed from a changed-file path before lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LookupPrefix {
    /// Drop everything up to and including the first `/`
    #[default]
    FirstSegment,
    /// Drop the collection directory prefix (e.g. `posts/`) only when present
    CollectionDir,
}

impl LookupPrefix {
    /// Strip the prefix from an already-normalized path.
    ///
    /// `dir_name` is the collection directory name, used by
    /// [`LookupPrefix::CollectionDir`].
    #[must_use]
    pub fn strip<'a>(self, path: &'a str, dir_name: &str) -> &'a str {
        match self {
            Self::FirstSegment => path.split_once('/').map_or(path, |(_, rest)| rest),
            Self::CollectionDir => path
                .strip_prefix(dir_name)
                .and_then(|rest| rest.strip_prefix('/'))
                .unwrap_or(path),
        }
    }
}

/// Mapping from resource path to the ordered reference paths it depends on.
///
/// Every path is stored with forward slashes, whether it was inserted or
/// decoded from a cache file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DependencyIndex {
    entries: BTreeMap<String, Vec<String>>,
}

impl DependencyIndex {
    /// Create an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the references of one resource, replacing any previous entry.
    pub fn insert(&mut self, resource: impl AsRef<str>, references: Vec<String>) {
        let references = references.iter().map(|r| normalize_reference_path(r)).collect();
        self.entries.insert(normalize_path_for_storage(resource.as_ref()), references);
    }

    /// Number of resources in the index.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index holds no resources.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `resource` is a key of the index.
    #[must_use]
    pub fn contains_resource(&self, resource: &str) -> bool {
        self.entries.contains_key(&normalize_path_for_storage(resource))
    }

    /// Total number of references across all resources.
    #[must_use]
    pub fn reference_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Iterate `(resource, references)` pairs in resource-path order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// References recorded for `resource`, if it is indexed.
    #[must_use]
    pub fn references_of(&self, resource: &str) -> Option<&[String]> {
        self.entries.get(&normalize_path_for_storage(resource)).map(Vec::as_slice)
    }

    /// Resources whose references contain `reference`.
    ///
    /// `reference` is relative to the content root, i.e. already stripped of
    /// the collection directory.
    #[must_use]
    pub fn dependents_of_reference(&self, reference: &str) -> Vec<String> {
        let needle = normalize_reference_path(reference);
        self.entries
            .iter()
            .filter(|(_, references)| references.iter().any(|r| *r == needle))
            .map(|(resource, _)| resource.clone())
            .collect()
    }

    /// Resources that depend on `changed_file`.
    ///
    /// `changed_file` is relative to the repository root; the leading
    /// collection segment is removed according to `prefix` before comparing.
    /// Returns an empty list when nothing matches.
    #[must_use]
    pub fn find_dependents(&self, changed_file: &str, prefix: LookupPrefix, dir_name: &str) -> Vec<String> {
        let normalized = normalize_reference_path(changed_file);
        let relative = prefix.strip(&normalized, dir_name);
        self.dependents_of_reference(relative)
    }

    /// Union of [`find_dependents`](Self::find_dependents) over several changed files.
    ///
    /// Each resource appears once, in resource-path order.
    #[must_use]
    pub fn find_dependents_of_many<S: AsRef<str>>(
        &self,
        changed_files: &[S],
        prefix: LookupPrefix,
        dir_name: &str,
    ) -> Vec<String> {
        changed_files
            .iter()
            .flat_map(|file| self.find_dependents(file.as_ref(), prefix, dir_name))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

impl FromIterator<(String, Vec<String>)> for DependencyIndex {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        let mut index = Self::new();
        for (resource, references) in iter {
            index.insert(resource, references);
        }
        index
    }
}

impl<'de> Deserialize<'de> for DependencyIndex {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = BTreeMap::<String, Vec<String>>::deserialize(deserializer)?;
        Ok(entries.into_iter().collect())
    }
}

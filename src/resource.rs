//! Resource records and the scanner that lists the files they reference.
//!
//! A resource is a YAML document whose top level is a mapping of field name to
//! value. Only string values are inspected for reference tags; nested mappings,
//! sequences and scalars of other types are carried as opaque values.
//!
//! ```yaml
//! title: Introduction
//! hero: "@file(files/2.jpeg)"
//! body: "@content(files/md-content.md)"
//! order: 2
//! ```
//!
//! Scanning the record above yields `files/2.jpeg` and `files/md-content.md`.

use serde_yaml::{Mapping, Value};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::DepsError;
use crate::reference::{contains_marker, parse_reference};
use crate::utils::platform::normalize_path_for_storage;

/// One field value of a resource record.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Plain string value; the only kind that may carry a reference tag
    String(String),
    /// Nested mapping, kept but not scanned
    Mapping(Mapping),
    /// Any other YAML value (number, bool, null, sequence, tagged value)
    Other(Value),
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => Self::String(s),
            Value::Mapping(m) => Self::Mapping(m),
            other => Self::Other(other),
        }
    }
}

impl FieldValue {
    /// The string content, if this is a string value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

/// A decoded resource record.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceRecord {
    /// Root-relative path of the record, `/`-separated
    pub path: String,
    /// Fields in document order
    pub fields: Vec<(String, FieldValue)>,
}

impl ResourceRecord {
    /// Decode a record from YAML text.
    ///
    /// An empty document is a record with no fields.
    ///
    /// # Errors
    ///
    /// Returns [`DepsError::ResourceParse`] for invalid YAML and
    /// [`DepsError::InvalidResourceStructure`] when the document is not a mapping.
    pub fn from_yaml(path: &str, content: &str) -> Result<Self, DepsError> {
        let path = normalize_path_for_storage(path);

        if content.trim().is_empty() {
            return Ok(Self {
                path,
                fields: Vec::new(),
            });
        }

        let document: Value =
            serde_yaml::from_str(content).map_err(|source| DepsError::ResourceParse {
                path: path.clone(),
                source,
            })?;

        let mapping = match document {
            Value::Mapping(mapping) => mapping,
            Value::Null => Mapping::new(),
            other => {
                return Err(DepsError::InvalidResourceStructure {
                    path,
                    reason: format!("expected a mapping of fields, found {}", value_kind(&other)),
                });
            }
        };

        let fields = mapping.into_iter().map(|(key, value)| (field_name(&key), value.into())).collect();

        Ok(Self {
            path,
            fields,
        })
    }

    /// Read and decode the record at `root/path`.
    ///
    /// # Errors
    ///
    /// Returns [`DepsError::ResourceRead`] when the file cannot be read, plus
    /// any error from [`ResourceRecord::from_yaml`].
    pub fn load(root: &Path, path: &str) -> Result<Self, DepsError> {
        let content =
            fs::read_to_string(root.join(path)).map_err(|source| DepsError::ResourceRead {
                path: normalize_path_for_storage(path),
                source,
            })?;
        Self::from_yaml(path, &content)
    }

    /// Reference paths embedded in this record's string fields.
    ///
    /// Order follows the fields; duplicates and malformed tags are dropped.
    #[must_use]
    pub fn references(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.fields
            .iter()
            .filter_map(|(_, value)| value.as_str())
            .filter(|value| contains_marker(value))
            .filter_map(parse_reference)
            .map(|reference| reference.path)
            .filter(|path| seen.insert(path.clone()))
            .collect()
    }
}

fn field_name(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Null => "~".to_string(),
        other => serde_yaml::to_string(other).map_or_else(|_| format!("{other:?}"), |s| s.trim().to_string()),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

/// Lists the files referenced by resource records below a project root.
#[derive(Debug, Clone)]
pub struct ResourceScanner {
    root: PathBuf,
}

impl ResourceScanner {
    /// Create a scanner resolving resource paths against `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
        }
    }

    /// Project root the scanner reads from.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Scan one resource, surfacing decode failures.
    ///
    /// # Errors
    ///
    /// Returns the [`DepsError`] from [`ResourceRecord::load`].
    pub fn try_scan(&self, resource_path: &str) -> Result<Vec<String>, DepsError> {
        let record = ResourceRecord::load(&self.root, resource_path)?;
        let references = record.references();
        tracing::debug!("{} references {} file(s)", record.path, references.len());
        Ok(references)
    }

    /// Scan one resource, reporting decode failures.
    ///
    /// A record that cannot be read or decoded is logged and contributes no
    /// references.
    #[must_use]
    pub fn scan(&self, resource_path: &str) -> Vec<String> {
        self.try_scan(resource_path).unwrap_or_else(|error| {
            tracing::warn!("{error}");
            Vec::new()
        })
    }
}

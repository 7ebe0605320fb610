//! Extraction of embedded-file references from resource field values.
//!
//! A field value references an external file with one of two tag forms:
//!
//! - `@file(<path>)` - the resource embeds a binary asset (image, download, ...)
//! - `@content(<path>)` - the resource embeds a text fragment (markdown, html, ...)
//!
//! Both forms mean "this resource depends on `<path>`" and are treated
//! identically by the dependency index.
//!
//! # Extraction Rules
//!
//! - If a value contains `@file(`, that marker is used; otherwise `@content(`.
//! - The path runs from the end of the marker to the **last** `)` in the rest
//!   of the value, so `@file(img (large).png)` yields `img (large).png`.
//! - Surrounding whitespace is trimmed and the path is normalized to forward
//!   slashes without a leading `./`.
//! - A missing closing `)` or an empty path is a [`MalformedReference`]; it is
//!   reported and the value yields no reference.
//!
//! # Usage
//!
//! ```rust
//! use depcache::reference::{extract_reference, parse_reference};
//!
//! let reference = parse_reference("  @file(files/2.jpeg)  ").unwrap();
//! assert_eq!(reference.path, "files/2.jpeg");
//!
//! assert!(parse_reference("plain text").is_none());
//! assert!(extract_reference("@file(unterminated").is_err());
//! ```

use std::fmt;
use thiserror::Error;

use crate::utils::platform::normalize_reference_path;

/// Marker opening a file reference.
pub const FILE_MARKER: &str = "@file(";

/// Marker opening a content reference.
pub const CONTENT_MARKER: &str = "@content(";

/// Which tag form a reference was written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    /// `@file(...)`
    File,
    /// `@content(...)`
    Content,
}

impl TagKind {
    /// The opening marker for this tag form, including the `(`.
    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Self::File => FILE_MARKER,
            Self::Content => CONTENT_MARKER,
        }
    }

    /// Detect the tag form used in `value`, with `@file(` taking precedence.
    #[must_use]
    pub fn detect(value: &str) -> Option<Self> {
        if value.contains(FILE_MARKER) {
            Some(Self::File)
        } else if value.contains(CONTENT_MARKER) {
            Some(Self::Content)
        } else {
            None
        }
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => f.write_str("@file"),
            Self::Content => f.write_str("@content"),
        }
    }
}

/// A file reference extracted from a field value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Reference {
    /// Tag form the reference was written with
    pub kind: TagKind,
    /// Normalized path relative to the resource content root
    pub path: String,
}

/// A tag marker was present but no usable path could be extracted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedReference {
    /// The marker has no closing `)` after it
    #[error("Missing ')' in {kind} reference: {value:?}")]
    MissingClosingParen {
        /// Tag form that was detected
        kind: TagKind,
        /// The offending field value
        value: String,
    },

    /// The text between the marker and the closing `)` is blank
    #[error("File path appears to be empty in {kind} reference: {value:?}")]
    EmptyPath {
        /// Tag form that was detected
        kind: TagKind,
        /// The offending field value
        value: String,
    },
}

/// Returns `true` if `value` contains either tag marker.
#[must_use]
pub fn contains_marker(value: &str) -> bool {
    TagKind::detect(value).is_some()
}

/// Extract the reference embedded in `value`.
///
/// # Returns
///
/// - `Ok(Some(reference))` when a well-formed tag is present
/// - `Ok(None)` when the value carries no tag marker
/// - `Err(MalformedReference)` when a marker is present but unusable
///
/// # Errors
///
/// Returns [`MalformedReference::MissingClosingParen`] when no `)` follows the
/// marker and [`MalformedReference::EmptyPath`] when the path is blank.
pub fn extract_reference(value: &str) -> Result<Option<Reference>, MalformedReference> {
    let Some(kind) = TagKind::detect(value) else {
        return Ok(None);
    };

    let marker = kind.marker();
    // detect() guarantees the marker is present
    let start = value.find(marker).map_or(0, |pos| pos + marker.len());
    let remainder = &value[start..];

    let Some(closing) = remainder.rfind(')') else {
        return Err(MalformedReference::MissingClosingParen {
            kind,
            value: value.to_string(),
        });
    };

    let path = normalize_reference_path(remainder[..closing].trim());
    if path.is_empty() {
        return Err(MalformedReference::EmptyPath {
            kind,
            value: value.to_string(),
        });
    }

    Ok(Some(Reference { kind, path }))
}

/// Extract the reference embedded in `value`, reporting malformed tags.
///
/// Malformed tags are logged as warnings and yield `None`, so callers can keep
/// processing the remaining fields.
#[must_use]
pub fn parse_reference(value: &str) -> Option<Reference> {
    match extract_reference(value) {
        Ok(reference) => reference,
        Err(malformed) => {
            tracing::warn!("{malformed}");
            None
        }
    }
}

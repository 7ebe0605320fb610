//! Error handling for depcache
//!
//! The error system follows two rules:
//! 1. **Strongly-typed errors** ([`DepsError`]) for the library's failure modes
//! 2. **User-friendly messages** ([`ErrorContext`]) with suggestions for CLI users
//!
//! # Recovery Policy
//!
//! Almost every variant of [`DepsError`] is recovered locally by the engine and
//! only *reported* through `tracing`:
//!
//! - Resource decode failures ([`DepsError::ResourceRead`], [`DepsError::ResourceParse`],
//!   [`DepsError::InvalidResourceStructure`]) make the resource contribute an empty
//!   reference list while the build continues.
//! - Cache decode failures ([`DepsError::CacheRead`], [`DepsError::CacheParse`])
//!   trigger a rebuild.
//! - Cache write failures ([`DepsError::CacheWrite`]) leave the in-memory index valid.
//!
//! The typed variants still exist so that the `try_*` entry points can surface
//! them to callers (and tests) that want to see them.
//!
//! # Examples
//!
//! ```rust,no_run
//! use depcache::core::{DepsError, ErrorContext};
//!
//! let context = ErrorContext::new(DepsError::InvalidCollectionName {
//!     name: "posts/extra".to_string(),
//! })
//! .with_suggestion("Use the singular collection name, e.g. 'post'");
//!
//! context.display();
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for depcache operations.
///
/// # Error Categories
///
/// ## Resources
/// - [`ResourceRead`](DepsError::ResourceRead) - record could not be read
/// - [`ResourceParse`](DepsError::ResourceParse) - record is not valid YAML
/// - [`InvalidResourceStructure`](DepsError::InvalidResourceStructure) - record is not a mapping
/// - [`ResourceEnumeration`](DepsError::ResourceEnumeration) - collection directory could not be listed
///
/// ## Cache
/// - [`CacheRead`](DepsError::CacheRead) - cache file could not be opened
/// - [`CacheParse`](DepsError::CacheParse) - cache file is corrupt
/// - [`CacheWrite`](DepsError::CacheWrite) - cache file could not be written
///
/// ## Configuration
/// - [`InvalidCollectionName`](DepsError::InvalidCollectionName)
/// - [`ConfigError`](DepsError::ConfigError)
#[derive(Error, Debug)]
pub enum DepsError {
    /// Resource record could not be read from disk
    #[error("Failed to read resource '{path}': {source}")]
    ResourceRead {
        /// Root-relative path of the resource
        path: String,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// Resource record is not valid YAML
    ///
    /// The message carries the problem location when the parser reports one.
    #[error("Failed to parse resource '{path}': {source}")]
    ResourceParse {
        /// Root-relative path of the resource
        path: String,
        /// Underlying YAML failure
        #[source]
        source: serde_yaml::Error,
    },

    /// Resource record parsed but is not a field mapping
    #[error("Invalid resource structure in '{path}': {reason}")]
    InvalidResourceStructure {
        /// Root-relative path of the resource
        path: String,
        /// Why the structure was rejected
        reason: String,
    },

    /// Resource records of a collection could not be enumerated
    #[error("Failed to list resources matching '{pattern}': {reason}")]
    ResourceEnumeration {
        /// Glob pattern that was evaluated
        pattern: String,
        /// Why enumeration failed
        reason: String,
    },

    /// Cache file exists but could not be read
    #[error("Failed to read dependency cache '{path}': {source}")]
    CacheRead {
        /// Path of the cache file
        path: String,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// Cache file contents are not a valid dependency index
    #[error("Corrupt dependency cache '{path}': {reason}")]
    CacheParse {
        /// Path of the cache file
        path: String,
        /// Decoder message
        reason: String,
    },

    /// Cache file could not be written
    #[error("Failed to write dependency cache '{path}': {reason}")]
    CacheWrite {
        /// Path of the cache file
        path: String,
        /// Why the write failed
        reason: String,
    },

    /// Collection name cannot be mapped onto a storage directory
    #[error("Invalid collection name '{name}'")]
    InvalidCollectionName {
        /// The rejected name
        name: String,
    },

    /// Configuration file problem
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration error
        message: String,
    },
}

/// Error wrapper carrying user-facing details and a suggestion.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: anyhow::Error,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details.
    #[must_use]
    pub fn new(error: impl Into<anyhow::Error>) -> Self {
        Self {
            error: error.into(),
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error.
    ///
    /// Suggestions are displayed in green.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add details explaining the error.
    ///
    /// Details are displayed in yellow.
    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error context to stderr with terminal colors.
    pub fn display(&self) {
        eprintln!("{}: {:#}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

/// Convert any error into an [`ErrorContext`] with contextual suggestions.
///
/// Walks the error chain looking for a [`DepsError`] or an I/O error and picks
/// a suggestion matching the first one found.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    let mut suggestion = None;
    let mut details = None;

    for cause in error.chain() {
        if let Some(deps_error) = cause.downcast_ref::<DepsError>() {
            (suggestion, details) = suggestions_for(deps_error);
            break;
        }
        if let Some(io_error) = cause.downcast_ref::<std::io::Error>() {
            match io_error.kind() {
                std::io::ErrorKind::PermissionDenied => {
                    suggestion = Some("Check file ownership and permissions".to_string());
                }
                std::io::ErrorKind::NotFound => {
                    suggestion = Some(
                        "Check that the path exists and that --root points at the project"
                            .to_string(),
                    );
                }
                _ => {}
            }
            break;
        }
    }

    let mut context = ErrorContext::new(error);
    if let Some(suggestion) = suggestion {
        context = context.with_suggestion(suggestion);
    }
    if let Some(details) = details {
        context = context.with_details(details);
    }
    context
}

fn suggestions_for(error: &DepsError) -> (Option<String>, Option<String>) {
    match error {
        DepsError::InvalidCollectionName { .. } => (
            Some("Use the singular collection name without separators, e.g. 'post' for posts/".to_string()),
            Some("A collection 'post' is stored in the 'posts/' directory".to_string()),
        ),
        DepsError::ConfigError { .. } => (
            Some("Fix the syntax of depcache.toml or pass a different file with --config".to_string()),
            None,
        ),
        DepsError::CacheWrite { .. } => (
            Some("Check that the collection directory is writable".to_string()),
            Some("The index was still built and used for this run".to_string()),
        ),
        DepsError::CacheParse { .. } | DepsError::CacheRead { .. } => (
            Some("Run 'depcache clean <collection>' to discard the cache file".to_string()),
            None,
        ),
        DepsError::ResourceRead { .. }
        | DepsError::ResourceParse { .. }
        | DepsError::InvalidResourceStructure { .. } => (
            Some("Fix the resource record; it must be a YAML mapping of fields".to_string()),
            None,
        ),
        DepsError::ResourceEnumeration { .. } => (
            Some("Check that the collection directory exists and is readable".to_string()),
            None,
        ),
    }
}

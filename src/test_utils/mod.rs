//! Test utilities for depcache
//!
//! Helpers shared by unit tests and the integration suite (through the
//! `test-utils` feature):
//! - [`init_test_logging`] - one-time tracing setup honouring `RUST_LOG`
//! - [`CollectionFixture`] - a temporary project root with a collection on disk
//!
//! # Example
//!
//! ```rust,no_run
//! use depcache::test_utils::CollectionFixture;
//!
//! let fixture = CollectionFixture::example_posts();
//! assert!(fixture.path("posts/introduction2.yaml").is_file());
//! ```

pub mod fixtures;

pub use fixtures::{CollectionFixture, INTRODUCTION2_YAML, INTRODUCTION_YAML};

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Uses `level` when given, otherwise `RUST_LOG`; with neither, logging stays
/// off. Safe to call from every test.
///
/// ```bash
/// RUST_LOG=depcache=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .try_init();
    });
}

//! Integration test suite for depcache
//!
//! End-to-end tests that drive the `depcache` binary against temporary
//! collections, plus library-level tests of the public tracker API.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **build**: `depcache build` and cache file contents
//! - **cache_recovery**: missing, corrupt, and stale cache handling
//! - **clean**: `depcache clean`
//! - **config**: `depcache.toml` and global flags
//! - **dependents**: reverse lookups from changed files
//! - **scan**: `depcache scan` on single records
//! - **show**: `depcache show` text and JSON output
//! - **tracker_api**: library use without the CLI

mod common;

mod build;
mod clean;
mod config;
mod dependents;
mod scan;
mod show;
mod tracker_api;

//! Filesystem and path helpers shared by the cache engine.
//!
//! - [`fs`] - Atomic file writes
//! - [`platform`] - Path separator normalization for stored and looked-up paths

pub mod fs;
pub mod platform;

pub use fs::atomic_write;
pub use platform::{normalize_path_for_storage, normalize_reference_path};

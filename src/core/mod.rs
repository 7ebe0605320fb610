//! Core types for depcache
//!
//! - [`DepsError`] - Enumerated error types covering the engine's failure modes
//! - [`ErrorContext`] - User-friendly error wrapper with suggestions and details
//! - [`user_friendly_error`] - Convert any error to user-friendly format

pub mod error;

pub use error::{DepsError, ErrorContext, user_friendly_error};

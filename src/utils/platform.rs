//! Path normalization for stored and compared paths.
//!
//! Paths are stored in the dependency cache with forward slashes on every
//! platform so that a cache written on Windows can be read on Unix and the
//! other way round. Lookups normalize their input the same way before
//! comparing.

use std::path::Path;

/// Normalizes a path for cross-platform storage by converting all separators to forward slashes.
///
/// Windows extended-length prefixes (`\\?\`) are stripped first.
///
/// # Examples
///
/// ```rust
/// use depcache::utils::platform::normalize_path_for_storage;
/// use std::path::Path;
///
/// assert_eq!(normalize_path_for_storage(Path::new("posts\\intro.yaml")), "posts/intro.yaml");
/// assert_eq!(normalize_path_for_storage("posts/intro.yaml"), "posts/intro.yaml");
/// ```
#[must_use]
pub fn normalize_path_for_storage<P: AsRef<Path>>(path: P) -> String {
    let path_str = path.as_ref().to_string_lossy();

    let cleaned = if let Some(stripped) = path_str.strip_prefix(r"\\?\UNC\") {
        format!("//{stripped}")
    } else if let Some(stripped) = path_str.strip_prefix(r"\\?\") {
        stripped.to_string()
    } else {
        path_str.to_string()
    };

    cleaned.replace('\\', "/")
}

/// Normalizes a reference path to its canonical stored form.
///
/// Separators become `/` and any leading `./` segments are removed, so
/// `.\files\a.md`, `./files/a.md` and `files/a.md` all compare equal.
///
/// # Examples
///
/// ```rust
/// use depcache::utils::platform::normalize_reference_path;
///
/// assert_eq!(normalize_reference_path(".\\files\\a.md"), "files/a.md");
/// assert_eq!(normalize_reference_path("files/a.md"), "files/a.md");
/// ```
#[must_use]
pub fn normalize_reference_path(path: &str) -> String {
    let normalized = normalize_path_for_storage(path);
    let mut rest = normalized.as_str();
    while let Some(stripped) = rest.strip_prefix("./") {
        rest = stripped;
    }
    rest.to_string()
}

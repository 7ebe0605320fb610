//! Atomic file writes using a temp-and-rename strategy.
//!
//! Readers of a cache file never observe a partially written index: the content
//! is written to a temporary file in the destination directory, synced, and
//! renamed over the target.

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Atomically writes bytes to `path`, replacing any existing file.
///
/// Parent directories are created when missing.
///
/// # Examples
///
/// ```rust,no_run
/// use depcache::utils::fs::atomic_write;
/// use std::path::Path;
///
/// # fn example() -> anyhow::Result<()> {
/// atomic_write(Path::new("posts/post.dependencies"), b"{}\n")?;
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns an error if the directory cannot be created, the temporary file
/// cannot be written or synced, or the final rename fails.
pub fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    fs::create_dir_all(parent)
        .with_context(|| format!("Failed to create directory: {}", parent.display()))?;

    let mut temp = NamedTempFile::new_in(parent)
        .with_context(|| format!("Failed to create temp file in: {}", parent.display()))?;

    temp.write_all(content)
        .with_context(|| format!("Failed to write temp file for: {}", path.display()))?;
    temp.as_file().sync_all().context("Failed to sync file to disk")?;

    temp.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to rename temp file to: {}", path.display()))?;

    Ok(())
}

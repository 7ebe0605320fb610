//! Delete dependency cache files.

use anyhow::{Context, Result};
use clap::Args;

use super::CommandContext;

/// Remove the cache file of each collection; the next lookup rebuilds it.
#[derive(Args, Debug)]
pub struct CleanCommand {
    /// Collections to clean. Defaults to depcache.toml `collections`.
    collections: Vec<String>,
}

impl CleanCommand {
    /// Execute the clean command.
    pub fn execute(self, ctx: &CommandContext) -> Result<()> {
        for collection in ctx.collections(&self.collections)? {
            let path = ctx.store().cache_path(&collection);
            let removed = ctx
                .store()
                .invalidate(&collection)
                .with_context(|| format!("Failed to remove {}", path.display()))?;

            if ctx.quiet() {
                continue;
            }
            if removed {
                println!("Removed {}", path.display());
            } else {
                println!("No cache for {collection}");
            }
        }
        Ok(())
    }
}

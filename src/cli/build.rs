//! Rebuild the dependency cache of one or more collections.
//!
//! ```bash
//! depcache build post page
//! ```

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use super::CommandContext;
use crate::tracker::DependencyTracker;

/// Rebuild and persist the dependency cache, ignoring any existing cache file.
#[derive(Args, Debug)]
pub struct BuildCommand {
    /// Collections to rebuild (singular names, e.g. `post` for `posts/`).
    ///
    /// Defaults to the `collections` listed in depcache.toml.
    collections: Vec<String>,
}

impl BuildCommand {
    /// Execute the build command.
    pub fn execute(self, ctx: &CommandContext) -> Result<()> {
        for collection in ctx.collections(&self.collections)? {
            let cache_path = ctx.store().cache_path(&collection);
            let (tracker, report) = DependencyTracker::rebuild(ctx.store(), collection);

            if ctx.quiet() {
                continue;
            }

            println!(
                "{} {}: {} resource(s), {} reference(s)",
                "Indexed".green().bold(),
                tracker.collection(),
                report.index.len(),
                report.index.reference_count()
            );
            for failed in &report.failed {
                println!("  {} {failed} (indexed without references)", "unreadable".yellow());
            }
            if report.persisted {
                println!("  wrote {}", cache_path.display());
            } else {
                println!("  {} could not write {}", "warning:".yellow(), cache_path.display());
            }
        }
        Ok(())
    }
}

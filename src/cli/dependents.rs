//! List resources that must be rebuilt because files changed.
//!
//! ```bash
//! depcache dependents -c post posts/files/md-content.md posts/files/2.jpeg
//! git diff --name-only | xargs depcache dependents
//! ```

use anyhow::Result;
use clap::Args;

use super::{CommandContext, OutputFormat};
use crate::tracker::DependencyTrackers;

/// Print every resource depending on any of the changed files.
#[derive(Args, Debug)]
pub struct DependentsCommand {
    /// Changed files, relative to the project root (e.g. `posts/files/md-content.md`).
    #[arg(required = true)]
    files: Vec<String>,

    /// Collections to search; repeatable. Defaults to depcache.toml `collections`.
    #[arg(short = 'c', long = "collection")]
    collections: Vec<String>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

impl DependentsCommand {
    /// Execute the dependents command.
    pub fn execute(self, ctx: &CommandContext) -> Result<()> {
        let collections = ctx.collections(&self.collections)?;
        let trackers = DependencyTrackers::load_all(ctx.store(), collections);

        for tracker in trackers.iter() {
            tracing::debug!("{}: index {}", tracker.collection(), tracker.origin());
        }

        let dependents = trackers.find_dependents_of_many(&self.files);
        match self.format {
            OutputFormat::Text => dependents.iter().for_each(|d| println!("{d}")),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&dependents)?),
        }
        Ok(())
    }
}

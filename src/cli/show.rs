//! Print a collection's dependency index.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use super::{CommandContext, OutputFormat};
use crate::collection::Collection;
use crate::tracker::DependencyTracker;

/// Print the loaded index, building it first if no valid cache exists.
#[derive(Args, Debug)]
pub struct ShowCommand {
    /// Collection to show.
    collection: String,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

impl ShowCommand {
    /// Execute the show command.
    pub fn execute(self, ctx: &CommandContext) -> Result<()> {
        let collection = Collection::new(self.collection)?;
        let tracker = DependencyTracker::load(ctx.store(), collection);

        match self.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(tracker.index())?);
            }
            OutputFormat::Text => {
                if !ctx.quiet() {
                    println!(
                        "{} {} ({})",
                        "Collection".bold(),
                        tracker.collection(),
                        tracker.origin()
                    );
                }
                for (resource, references) in tracker.index().iter() {
                    println!("{}", resource.cyan());
                    for reference in references {
                        println!("  - {reference}");
                    }
                }
            }
        }
        Ok(())
    }
}

//! List the files a single resource record references.
//!
//! ```bash
//! depcache scan posts/introduction2.yaml
//! ```

use anyhow::{Context, Result};
use clap::Args;

use super::{CommandContext, OutputFormat};
use crate::resource::ResourceScanner;

/// Print the references of one resource record.
#[derive(Args, Debug)]
pub struct ScanCommand {
    /// Resource path relative to the project root.
    resource: String,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

impl ScanCommand {
    /// Execute the scan command.
    ///
    /// Unlike a cache build, a resource that cannot be decoded is an error here.
    pub fn execute(self, ctx: &CommandContext) -> Result<()> {
        let scanner = ResourceScanner::new(ctx.store().root());
        let references = scanner
            .try_scan(&self.resource)
            .with_context(|| format!("Failed to scan {}", self.resource))?;

        match self.format {
            OutputFormat::Text => references.iter().for_each(|r| println!("{r}")),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&references)?),
        }
        Ok(())
    }
}

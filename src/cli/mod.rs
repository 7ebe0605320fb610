//! Command-line interface for depcache
//!
//! # Commands
//!
//! - `build` - Rebuild and persist the dependency cache of collections
//! - `scan` - List the files one resource record references
//! - `dependents` - List resources that depend on changed files
//! - `show` - Print a collection's dependency index
//! - `clean` - Delete dependency cache files
//!
//! # Global Options
//!
//! - `--root <DIR>` - Project root holding the collection directories (default `.`)
//! - `--config <FILE>` - Configuration file (default `<root>/depcache.toml` if present)
//! - `--verbose` / `--quiet` - Log verbosity; `RUST_LOG` takes precedence when set
//!
//! # Examples
//!
//! ```bash
//! depcache build post
//! depcache dependents -c post posts/files/md-content.md
//! depcache show post --format json
//! ```

mod build;
mod clean;
mod dependents;
mod scan;
mod show;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use crate::cache::CacheStore;
use crate::collection::Collection;
use crate::config::DepsConfig;

/// Runtime settings derived from the global flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Log filter used when `RUST_LOG` is not set
    pub log_level: String,
    /// Suppress non-essential output
    pub quiet: bool,
}

impl CliConfig {
    /// Install the global tracing subscriber writing to stderr.
    ///
    /// `RUST_LOG` overrides the configured level. Calling this more than once
    /// is harmless.
    pub fn init_logging(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.log_level));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }
}

/// Output format for commands that print data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON for scripts
    Json,
}

/// Reverse-dependency cache for content resources.
#[derive(Parser, Debug)]
#[command(
    name = "depcache",
    about = "Track which content resources depend on which embedded files",
    version,
    long_about = "depcache indexes @file(...) and @content(...) references in YAML resource \
                  records so a publishing pipeline can tell which resources to rebuild when a \
                  referenced file changes."
)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    command: Commands,

    /// Project root containing the collection directories.
    #[arg(short, long, global = true, default_value = ".", env = "DEPCACHE_ROOT")]
    root: PathBuf,

    /// Path to a configuration file (defaults to `<root>/depcache.toml` when present).
    #[arg(long, global = true, env = "DEPCACHE_CONFIG")]
    config: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only print errors and requested data.
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rebuild and persist the dependency cache of collections.
    Build(build::BuildCommand),

    /// List the files a resource record references.
    Scan(scan::ScanCommand),

    /// List resources that depend on changed files.
    Dependents(dependents::DependentsCommand),

    /// Print the dependency index of a collection.
    Show(show::ShowCommand),

    /// Delete dependency cache files so they are rebuilt on next use.
    Clean(clean::CleanCommand),
}

impl Cli {
    /// Build a [`CliConfig`] from the parsed flags.
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            "depcache=debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        };

        CliConfig {
            log_level: log_level.to_string(),
            quiet: self.quiet,
        }
    }

    /// Set up logging and run the command.
    ///
    /// # Errors
    ///
    /// Returns any error from configuration loading or the command itself.
    pub fn execute(self) -> Result<()> {
        let config = self.build_config();
        config.init_logging();
        self.execute_with_config(&config)
    }

    /// Run the command with an explicit [`CliConfig`], without touching logging.
    ///
    /// # Errors
    ///
    /// Returns any error from configuration loading or the command itself.
    pub fn execute_with_config(self, config: &CliConfig) -> Result<()> {
        let ctx = CommandContext::new(self.root, self.config.as_deref(), config.quiet)?;

        match self.command {
            Commands::Build(cmd) => cmd.execute(&ctx),
            Commands::Scan(cmd) => cmd.execute(&ctx),
            Commands::Dependents(cmd) => cmd.execute(&ctx),
            Commands::Show(cmd) => cmd.execute(&ctx),
            Commands::Clean(cmd) => cmd.execute(&ctx),
        }
    }
}

/// State shared by all commands of one invocation.
#[derive(Debug)]
pub struct CommandContext {
    store: CacheStore,
    quiet: bool,
}

impl CommandContext {
    /// Load configuration and set up the cache store for `root`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file cannot be loaded.
    pub fn new(root: PathBuf, config_path: Option<&Path>, quiet: bool) -> Result<Self> {
        let config = DepsConfig::load(&root, config_path)
            .with_context(|| format!("Failed to load configuration for {}", root.display()))?;

        Ok(Self {
            store: CacheStore::new(root, config),
            quiet,
        })
    }

    /// The project's cache store.
    #[must_use]
    pub fn store(&self) -> &CacheStore {
        &self.store
    }

    /// Whether informational output is suppressed.
    #[must_use]
    pub fn quiet(&self) -> bool {
        self.quiet
    }

    /// Resolve collection names, falling back to the configured collections.
    ///
    /// # Errors
    ///
    /// Returns an error for invalid names or when no collection is available.
    pub fn collections(&self, names: &[String]) -> Result<Vec<Collection>> {
        let names = if names.is_empty() {
            self.store.config().collections.as_slice()
        } else {
            names
        };

        if names.is_empty() {
            anyhow::bail!(
                "No collection given and none configured; pass one (e.g. 'post') or set \
                 `collections` in depcache.toml"
            );
        }

        names
            .iter()
            .map(|name| Collection::new(name.as_str()).map_err(anyhow::Error::from))
            .collect()
    }
}

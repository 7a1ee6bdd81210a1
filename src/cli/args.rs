//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::capability::Preference;

/// accelgate - Detect optional array acceleration at runtime.
#[derive(Debug, Parser)]
#[command(name = "accelgate")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (applied after the user config)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Only print errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check whether the acceleration module can be loaded (default)
    Probe(ProbeArgs),

    /// Show which materialization strategy a cursor would use
    Strategy(StrategyArgs),

    /// Show resolved configuration
    Config(ConfigArgs),
}

/// Arguments for the `probe` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ProbeArgs {
    /// Library stem or file to probe instead of the configured one
    #[arg(short, long)]
    pub module: Option<String>,

    /// Symbol the library must export
    #[arg(short, long)]
    pub symbol: Option<String>,

    /// Output the full probe report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `strategy` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct StrategyArgs {
    /// Materialization preference (auto, columnar, rows)
    #[arg(short, long)]
    pub prefer: Option<Preference>,

    /// Library stem or file to probe instead of the configured one
    #[arg(short, long)]
    pub module: Option<String>,

    /// Symbol the library must export
    #[arg(short, long)]
    pub symbol: Option<String>,
}

/// Arguments for the `config` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ConfigArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

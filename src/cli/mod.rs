//! Command-line interface for accelgate.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, ConfigArgs, ProbeArgs, StrategyArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};

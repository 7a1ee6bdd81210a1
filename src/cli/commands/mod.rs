//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait and is routed by
//! [`CommandDispatcher`].

pub mod config;
pub mod dispatcher;
pub mod probe;
pub mod strategy;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};

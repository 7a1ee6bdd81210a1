//! Command dispatching.
//!
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands, ProbeArgs};
use crate::config::{load_config, GateConfig};
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command against the resolved configuration.
    fn execute(&self, config: &GateConfig, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    config_path: Option<PathBuf>,
}

impl CommandDispatcher {
    /// Create a dispatcher that reads the given explicit config file.
    pub fn new(config_path: Option<PathBuf>) -> Self {
        Self { config_path }
    }

    /// Get the explicit config file path, if any.
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Load configuration, then route the subcommand.
    ///
    /// Running without a subcommand is the same as `probe`.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = load_config(self.config_path())?;
        self.dispatch_with_config(cli, &config, ui)
    }

    /// Route the subcommand with an already resolved configuration.
    pub fn dispatch_with_config(
        &self,
        cli: &Cli,
        config: &GateConfig,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Probe(args)) => {
                super::probe::ProbeCommand::new(args.clone()).execute(config, ui)
            }
            Some(Commands::Strategy(args)) => {
                super::strategy::StrategyCommand::new(args.clone()).execute(config, ui)
            }
            Some(Commands::Config(args)) => {
                super::config::ConfigCommand::new(args.clone()).execute(config, ui)
            }
            None => super::probe::ProbeCommand::new(ProbeArgs::default()).execute(config, ui),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use clap::Parser;

    fn missing_module_config() -> GateConfig {
        GateConfig {
            module: "accelgate-definitely-missing".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn command_result_codes() {
        assert_eq!(CommandResult::success().exit_code, 0);
        assert!(CommandResult::success().success);
        assert_eq!(CommandResult::failure(2).exit_code, 2);
        assert!(!CommandResult::failure(2).success);
    }

    #[test]
    fn no_subcommand_runs_probe() {
        let cli = Cli::parse_from(["accelgate"]);
        let mut ui = MockUI::new();
        let result = CommandDispatcher::new(None)
            .dispatch_with_config(&cli, &missing_module_config(), &mut ui)
            .unwrap();

        assert_eq!(result.exit_code, 1);
        assert_eq!(ui.warnings().len(), 1);
    }

    #[test]
    fn config_subcommand_is_routed() {
        let cli = Cli::parse_from(["accelgate", "config"]);
        let mut ui = MockUI::new();
        let result = CommandDispatcher::new(None)
            .dispatch_with_config(&cli, &missing_module_config(), &mut ui)
            .unwrap();

        assert!(result.success);
        assert_eq!(ui.value_of("module"), Some("accelgate-definitely-missing"));
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let cli = Cli::parse_from(["accelgate", "-c", "/nonexistent/accelgate.yml"]);
        let mut ui = MockUI::new();
        let dispatcher = CommandDispatcher::new(cli.config.clone());
        assert!(dispatcher.dispatch(&cli, &mut ui).is_err());
    }
}

//! Config command implementation.
//!
//! `accelgate config` shows the configuration after all layers are applied.

use crate::cli::args::ConfigArgs;
use crate::config::GateConfig;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The config command implementation.
pub struct ConfigCommand {
    args: ConfigArgs,
}

impl ConfigCommand {
    /// Create a new config command.
    pub fn new(args: ConfigArgs) -> Self {
        Self { args }
    }
}

impl Command for ConfigCommand {
    fn execute(&self, config: &GateConfig, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if self.args.json {
            let json = serde_json::to_string_pretty(config).map_err(anyhow::Error::from)?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        let spec = config.module_spec();
        ui.key_value("module", &config.module);
        ui.key_value("file", &spec.file_name().to_string_lossy());
        let paths: Vec<String> = config
            .search_paths
            .iter()
            .map(|p| p.display().to_string())
            .collect();
        ui.key_value("search_paths", &paths.join(", "));
        ui.key_value(
            "entry_symbol",
            config.entry_symbol.as_deref().unwrap_or("(none)"),
        );
        ui.key_value("prefer", &config.prefer.to_string());

        Ok(CommandResult::success())
    }
}

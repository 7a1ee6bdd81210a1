//! Probe command implementation.
//!
//! `accelgate probe` reports whether the acceleration module can be loaded.
//! Exit code 0 means available, 1 means unavailable.

use crate::capability::CapabilityProbe;
use crate::cli::args::ProbeArgs;
use crate::config::GateConfig;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The probe command implementation.
pub struct ProbeCommand {
    args: ProbeArgs,
}

impl ProbeCommand {
    /// Create a new probe command.
    pub fn new(args: ProbeArgs) -> Self {
        Self { args }
    }
}

impl Command for ProbeCommand {
    fn execute(&self, config: &GateConfig, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = config
            .with_module_override(self.args.module.as_deref(), self.args.symbol.as_deref());
        let report = CapabilityProbe::new(config.module_spec()).report();

        if self.args.json {
            let json = serde_json::to_string_pretty(&report).map_err(anyhow::Error::from)?;
            ui.message(&json);
        } else if report.available {
            ui.success(&format!("{} is available", report.module));
        } else {
            ui.warning(&format!("{} is unavailable", report.module));
            for attempt in &report.attempts {
                if let Some(error) = &attempt.error {
                    tracing::info!("{}: {}", attempt.candidate.display(), error);
                }
            }
        }

        Ok(if report.available {
            CommandResult::success()
        } else {
            CommandResult::failure(1)
        })
    }
}

//! Strategy command implementation.
//!
//! `accelgate strategy` prints the materialization strategy a cursor would
//! pick. Exit code [`ACCELERATION_REQUIRED_EXIT`] means columnar output was
//! demanded but is unavailable.

use crate::capability::{select_strategy, CapabilityProbe, LiveProvider};
use crate::cli::args::StrategyArgs;
use crate::config::GateConfig;
use crate::error::{GateError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Exit code when columnar output is demanded but unavailable.
///
/// Distinct from clap's usage-error code 2.
pub const ACCELERATION_REQUIRED_EXIT: i32 = 4;

/// The strategy command implementation.
pub struct StrategyCommand {
    args: StrategyArgs,
}

impl StrategyCommand {
    /// Create a new strategy command.
    pub fn new(args: StrategyArgs) -> Self {
        Self { args }
    }
}

impl Command for StrategyCommand {
    fn execute(&self, config: &GateConfig, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = config
            .with_module_override(self.args.module.as_deref(), self.args.symbol.as_deref());
        let preference = self.args.prefer.unwrap_or(config.prefer);
        let provider = LiveProvider::new(CapabilityProbe::new(config.module_spec()));

        match select_strategy(preference, &provider) {
            Ok(strategy) => {
                ui.key_value("preference", &preference.to_string());
                ui.key_value("strategy", &strategy.to_string());
                Ok(CommandResult::success())
            }
            Err(e @ GateError::AccelerationRequired { .. }) => {
                ui.error(&e.to_string());
                Ok(CommandResult::failure(ACCELERATION_REQUIRED_EXIT))
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::Preference;
    use crate::ui::MockUI;

    fn missing() -> GateConfig {
        GateConfig {
            module: "accelgate-definitely-missing".into(),
            ..Default::default()
        }
    }

    #[test]
    fn auto_without_module_uses_rows() {
        let mut ui = MockUI::new();
        let result = StrategyCommand::new(StrategyArgs::default())
            .execute(&missing(), &mut ui)
            .unwrap();

        assert!(result.success);
        assert_eq!(ui.value_of("preference"), Some("auto"));
        assert_eq!(ui.value_of("strategy"), Some("rows"));
    }

    #[test]
    fn demanded_columnar_without_module_exits_four() {
        let mut ui = MockUI::new();
        let cmd = StrategyCommand::new(StrategyArgs {
            prefer: Some(Preference::Columnar),
            ..Default::default()
        });
        let result = cmd.execute(&missing(), &mut ui).unwrap();

        assert_eq!(result, CommandResult::failure(4));
        assert_ne!(ACCELERATION_REQUIRED_EXIT, 2);
        assert!(ui.errors()[0].contains("accelgate-definitely-missing"));
    }

    #[cfg(all(target_os = "linux", target_env = "gnu"))]
    #[test]
    fn symbol_flag_is_required_of_the_module() {
        let mut ui = MockUI::new();
        let cmd = StrategyCommand::new(StrategyArgs {
            prefer: Some(Preference::Auto),
            module: Some("libc.so.6".into()),
            symbol: Some("accelgate_no_such_symbol".into()),
        });
        cmd.execute(&GateConfig::default(), &mut ui).unwrap();

        assert_eq!(ui.value_of("strategy"), Some("rows"));
    }

    #[test]
    fn configured_preference_is_used_when_flag_absent() {
        let mut ui = MockUI::new();
        let config = GateConfig {
            prefer: Preference::Rows,
            ..missing()
        };
        StrategyCommand::new(StrategyArgs::default())
            .execute(&config, &mut ui)
            .unwrap();

        assert_eq!(ui.value_of("preference"), Some("rows"));
        assert_eq!(ui.value_of("strategy"), Some("rows"));
    }
}

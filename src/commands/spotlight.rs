//! Spotlight command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::{LintSettings, SpotlightConfig};
use crate::error::LoopDeLoopError;

impl FromCommand for SpotlightConfig {
    fn from_command(command: Commands) -> Result<Self, LoopDeLoopError> {
        match command {
            Commands::Spotlight {
                file,
                common,
                format,
                cycle_display,
            } => SpotlightConfig::builder()
                .with_file(file)
                .with_settings(LintSettings::from_args(&common, &cycle_display)?)
                .with_format(format.format)
                .with_max_cycles(cycle_display.max_cycles)
                .build(),
            _ => Err(LoopDeLoopError::ConfigurationError {
                message: "Invalid command type for SpotlightConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(SpotlightConfig);

/// Execute the spotlight command for listing cycles through one file
pub fn execute_spotlight_command(command: Commands) -> Result<()> {
    let config = SpotlightConfig::from_command(command)
        .wrap_err("Failed to parse spotlight command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::spotlight::SpotlightExecutor;
    SpotlightExecutor::execute(config)
}

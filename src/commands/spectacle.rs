//! Spectacle command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, CycleDisplayArgs, FromCommand};
use crate::config::{LintSettings, SpectacleConfig};
use crate::error::LoopDeLoopError;

impl FromCommand for SpectacleConfig {
    fn from_command(command: Commands) -> Result<Self, LoopDeLoopError> {
        match command {
            Commands::Spectacle {
                common,
                format,
                output,
                highlight_cycles,
            } => SpectacleConfig::builder()
                .with_settings(LintSettings::from_args(
                    &common,
                    &CycleDisplayArgs::default(),
                )?)
                .with_format(format)
                .with_output(output)
                .with_highlight_cycles(highlight_cycles)
                .build(),
            _ => Err(LoopDeLoopError::ConfigurationError {
                message: "Invalid command type for SpectacleConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(SpectacleConfig);

/// Execute the spectacle command for rendering the import graph
pub fn execute_spectacle_command(command: Commands) -> Result<()> {
    let config = SpectacleConfig::from_command(command)
        .wrap_err("Failed to parse spectacle command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::spectacle::SpectacleExecutor;
    SpectacleExecutor::execute(config)
}

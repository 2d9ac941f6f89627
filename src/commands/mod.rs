//! Command implementations for loop-de-loop CLI
//!
//! This module contains the implementations for each CLI command:
//! - inspect: Inspect the track for loops
//! - spotlight: Put a spotlight on every loop through one file
//! - spectacle: Create a spectacular picture of the import graph

pub mod inspect;
pub mod spectacle;
pub mod spotlight;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Inspect { .. } => inspect::execute_inspect_command(command),
        Commands::Spotlight { .. } => spotlight::execute_spotlight_command(command),
        Commands::Spectacle { .. } => spectacle::execute_spectacle_command(command),
    }
}

//! Inspect command executor

use console::style;
use miette::{Result, WrapErr};

use crate::config::InspectConfig;
use crate::executors::{CommandExecutor, generate_report, lint_sources};
use crate::progress::ProgressReporter;

pub struct InspectExecutor;

impl CommandExecutor for InspectExecutor {
    type Config = InspectConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!("{} Checking for circular imports...\n", style("🎢").cyan());

        let mut progress = ProgressReporter::for_terminal();

        let (_, report) = lint_sources(&config.settings, progress.as_mut())
            .wrap_err("Failed to lint source files")?;

        if report.files_checked == 0 {
            eprintln!("{} No source files found to lint", style("ℹ").blue());
            return Ok(());
        }

        if let Some(p) = progress.as_ref() {
            p.finish_cycle_detection(report.cycle_count());
        }

        let output = generate_report(config.format, config.max_cycles, &report)?;
        print!("{output}");

        // Exit with error code if cycles found and requested
        if config.error_on_cycles && report.has_cycles() {
            std::process::exit(1);
        }

        Ok(())
    }
}

//! Spotlight command executor

use std::sync::Arc;

use console::style;
use miette::{Result, WrapErr};

use crate::analyzer::LintReport;
use crate::config::SpotlightConfig;
use crate::core::FileId;
use crate::error::LoopDeLoopError;
use crate::executors::{CommandExecutor, generate_report, lint_sources};
use crate::progress::ProgressReporter;

pub struct SpotlightExecutor;

impl CommandExecutor for SpotlightExecutor {
    type Config = SpotlightConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let file = FileId::new(&config.file);
        eprintln!(
            "{} Looking for loops through '{}'...\n",
            style("🔦").cyan(),
            style(file.display_relative(config.settings.root.as_deref())).bold()
        );

        let source = std::fs::read_to_string(file.path()).map_err(|e| {
            LoopDeLoopError::FileReadError {
                path: file.path().to_path_buf(),
                source: e,
            }
        })?;

        let mut progress = ProgressReporter::for_terminal();
        let (linter, linted) = lint_sources(&config.settings, progress.as_mut())
            .wrap_err("Failed to lint source files")?;

        if !linter.graph().files().contains(&file) {
            eprintln!(
                "{} '{}' is not part of the import graph of the given paths",
                style("ℹ").blue(),
                config.file.display()
            );
        }

        let report = LintReport {
            files_checked: linted.files_checked,
            diagnostics: linter.spotlight(&file, Arc::from(source)),
            root: linted.root,
        };

        if let Some(p) = progress.as_ref() {
            p.finish_cycle_detection(report.cycle_count());
        }

        let output = generate_report(config.format, config.max_cycles, &report)?;
        print!("{output}");

        Ok(())
    }
}

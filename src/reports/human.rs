//! Human-readable console report generation

use std::fmt::Write;

use console::style;
use miette::{Diagnostic, GraphicalReportHandler, GraphicalTheme, NamedSource, SourceSpan};
use thiserror::Error;

use super::ReportGenerator;
use crate::analyzer::{CycleDiagnostic, LintReport};
use crate::error::LoopDeLoopError;
use crate::utils::string::pluralize;

/// A cycle diagnostic in the shape miette's graphical handler renders
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(
    code(loop_de_loop::import_cycle),
    help("Move the shared code into a module that none of these files import, or drop one of the imports")
)]
struct AnnotatedCycle {
    message: String,
    #[source_code]
    source_code: NamedSource<String>,
    #[label("this import closes the loop")]
    span: SourceSpan,
}

impl AnnotatedCycle {
    fn new(diagnostic: &CycleDiagnostic, name: String) -> Self {
        Self {
            message: diagnostic.message.clone(),
            source_code: NamedSource::new(name, diagnostic.source.to_string()),
            span: diagnostic.location.into(),
        }
    }
}

pub struct HumanReportGenerator {
    max_cycles: Option<usize>,
    colors: bool,
}

impl HumanReportGenerator {
    pub fn new(max_cycles: Option<usize>) -> Self {
        Self {
            max_cycles,
            colors: console::colors_enabled(),
        }
    }

    pub fn with_colors(mut self, colors: bool) -> Self {
        self.colors = colors;
        self
    }

    fn handler(&self) -> GraphicalReportHandler {
        let theme = if self.colors {
            GraphicalTheme::unicode()
        } else {
            GraphicalTheme::unicode_nocolor()
        };
        GraphicalReportHandler::new_themed(theme).with_width(100)
    }
}

impl ReportGenerator for HumanReportGenerator {
    fn generate_report(&self, report: &LintReport) -> Result<String, LoopDeLoopError> {
        let mut output = String::new();

        if !report.has_cycles() {
            write!(
                output,
                "\n{} No circular imports detected in {} {}! Every ride ends where it should.\n",
                style("✅").green().bold(),
                style(report.files_checked).bold(),
                pluralize("file", report.files_checked)
            )?;
            return Ok(output);
        }

        let total_cycles = report.cycle_count();
        write!(
            output,
            "\n{} Found {} circular {}:\n\n",
            style("❌").red().bold(),
            style(total_cycles).red().bold(),
            pluralize("import", total_cycles)
        )?;

        let shown = self.max_cycles.unwrap_or(total_cycles).min(total_cycles);
        let handler = self.handler();

        for (i, diagnostic) in report.diagnostics.iter().take(shown).enumerate() {
            writeln!(
                output,
                "{} Cycle #{} ({} {})",
                style("🔄").yellow(),
                i + 1,
                diagnostic.cycle.len(),
                pluralize("file", diagnostic.cycle.len())
            )?;

            let annotated = AnnotatedCycle::new(diagnostic, report.display_path(&diagnostic.file));
            handler.render_report(&mut output, &annotated)?;
            writeln!(output)?;
        }

        if shown < total_cycles {
            writeln!(
                output,
                "{} Showing {} of {} cycles. Use --max-cycles to see more.",
                style("ℹ️").blue(),
                style(shown).yellow(),
                style(total_cycles).yellow()
            )?;
        }

        writeln!(
            output,
            "\n{} Removing any one import from a cycle breaks it.",
            style("💡").yellow()
        )?;
        writeln!(
            output,
            "{} Use `loop-de-loop spotlight <FILE>` to list the cycles through a file.",
            style("💡").yellow()
        )?;

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::fixtures::{clean_report, report_with_cycle};

    fn generate(report: &LintReport, max_cycles: Option<usize>) -> String {
        HumanReportGenerator::new(max_cycles)
            .with_colors(false)
            .generate_report(report)
            .unwrap()
    }

    #[test]
    fn test_clean_report() {
        let output = generate(&clean_report(), None);
        assert!(output.contains("No circular imports detected in 3 files"));
    }

    #[test]
    fn test_cycle_is_rendered_with_label() {
        let output = generate(&report_with_cycle(), None);

        assert!(output.contains("Found 1 circular import:"));
        assert!(output.contains("Cycle #1 (2 files)"));
        assert!(output.contains("circular import detected: y.ts -> x.ts -> y.ts"));
        assert!(output.contains("y.ts:2:1"));
        assert!(output.contains("import { x } from './x';"));
        assert!(output.contains("this import closes the loop"));
        assert!(output.contains("loop_de_loop::import_cycle"));
    }

    #[test]
    fn test_max_cycles_limits_output() {
        let mut report = report_with_cycle();
        let extra = report.diagnostics[0].clone();
        report.diagnostics.push(extra);

        let output = generate(&report, Some(1));
        assert!(output.contains("Cycle #1"));
        assert!(!output.contains("Cycle #2"));
        assert!(output.contains("Showing 1 of 2 cycles"));
    }
}

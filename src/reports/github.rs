//! GitHub Actions format report generation

use std::fmt::Write;

use super::ReportGenerator;
use crate::analyzer::LintReport;
use crate::error::LoopDeLoopError;
use crate::utils::string::{escape_workflow_data, escape_workflow_property, pluralize};

pub struct GitHubReportGenerator;

impl Default for GitHubReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl GitHubReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for GitHubReportGenerator {
    fn generate_report(&self, report: &LintReport) -> Result<String, LoopDeLoopError> {
        let mut output = String::new();

        if !report.has_cycles() {
            writeln!(
                output,
                "::notice title=Import Check::No circular imports detected! ✅"
            )?;
            return Ok(output);
        }

        for diagnostic in &report.diagnostics {
            writeln!(
                output,
                "::error file={},line={},col={},title=Circular Import::{}",
                escape_workflow_property(&report.display_path(&diagnostic.file)),
                diagnostic.location.line,
                diagnostic.location.column,
                escape_workflow_data(&diagnostic.message)
            )?;
        }

        writeln!(
            output,
            "::notice title=Import Cycles::Found {} circular {}",
            report.cycle_count(),
            pluralize("import", report.cycle_count())
        )?;

        Ok(output)
    }
}

//! JSON format report generation

use serde_json::json;

use super::ReportGenerator;
use crate::analyzer::LintReport;
use crate::error::LoopDeLoopError;

pub struct JsonReportGenerator;

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JsonReportGenerator {
    fn generate_report(&self, report: &LintReport) -> Result<String, LoopDeLoopError> {
        let diagnostics: Vec<_> = report
            .diagnostics
            .iter()
            .map(|diagnostic| {
                let cycle: Vec<String> = diagnostic
                    .cycle
                    .members()
                    .iter()
                    .map(|member| report.display_path(member))
                    .collect();

                json!({
                    "file": report.display_path(&diagnostic.file),
                    "line": diagnostic.location.line,
                    "column": diagnostic.location.column,
                    "offset": diagnostic.location.offset,
                    "length": diagnostic.location.length,
                    "message": diagnostic.message,
                    "cycle": cycle,
                })
            })
            .collect();

        let output = json!({
            "has_cycles": report.has_cycles(),
            "cycle_count": report.cycle_count(),
            "files_checked": report.files_checked,
            "diagnostics": diagnostics,
        });

        serde_json::to_string_pretty(&output).map_err(LoopDeLoopError::Json)
    }
}

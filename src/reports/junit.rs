//! JUnit XML format report generation

use std::fmt::Write;

use super::ReportGenerator;
use crate::analyzer::LintReport;
use crate::error::LoopDeLoopError;
use crate::utils::string::escape_xml;

pub struct JunitReportGenerator;

impl Default for JunitReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JunitReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JunitReportGenerator {
    fn generate_report(&self, report: &LintReport) -> Result<String, LoopDeLoopError> {
        let mut output = String::new();
        let failing = report.by_file();
        let tests = failing.len().max(1);

        writeln!(output, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(
            output,
            r#"<testsuites name="loop-de-loop" tests="{}" failures="{}">"#,
            tests,
            failing.len()
        )?;
        writeln!(
            output,
            r#"  <testsuite name="import-cycles" tests="{}" failures="{}">"#,
            tests,
            failing.len()
        )?;

        if failing.is_empty() {
            writeln!(
                output,
                r#"    <testcase name="check-import-cycles" classname="loop-de-loop" />"#
            )?;
        }

        for (file, diagnostics) in failing {
            let path = escape_xml(&report.display_path(file));
            writeln!(
                output,
                r#"    <testcase name="{path}" classname="loop-de-loop">"#
            )?;
            for diagnostic in diagnostics {
                writeln!(
                    output,
                    r#"      <failure message="{}" type="import-cycle">{}:{}:{}</failure>"#,
                    escape_xml(&diagnostic.message),
                    path,
                    diagnostic.location.line,
                    diagnostic.location.column
                )?;
            }
            writeln!(output, r#"    </testcase>"#)?;
        }

        writeln!(output, r#"  </testsuite>"#)?;
        writeln!(output, r#"</testsuites>"#)?;

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::fixtures::{clean_report, report_with_cycle};

    #[test]
    fn test_junit_clean_report() {
        let output = JunitReportGenerator::new()
            .generate_report(&clean_report())
            .unwrap();

        assert!(output.contains(r#"failures="0""#));
        assert!(output.contains(r#"<testcase name="check-import-cycles" classname="loop-de-loop" />"#));
    }

    #[test]
    fn test_junit_failure_per_file() {
        let output = JunitReportGenerator::new()
            .generate_report(&report_with_cycle())
            .unwrap();

        assert!(output.contains(r#"<testsuite name="import-cycles" tests="1" failures="1">"#));
        assert!(output.contains(r#"<testcase name="y.ts" classname="loop-de-loop">"#));
        assert!(output.contains(
            r#"<failure message="circular import detected: y.ts -&gt; x.ts -&gt; y.ts" type="import-cycle">y.ts:2:1</failure>"#
        ));
    }
}

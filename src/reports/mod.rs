//! Report generation modules for different output formats
//!
//! This module contains report generators for various output formats:
//! - human: Human-readable console output with annotated source snippets
//! - json: JSON format for programmatic use
//! - junit: JUnit XML format for CI/CD integration
//! - github: GitHub Actions workflow commands for inline annotations

pub mod github;
pub mod human;
pub mod json;
pub mod junit;

use crate::analyzer::LintReport;
use crate::error::LoopDeLoopError;

/// Common trait for all report generators
pub trait ReportGenerator {
    /// Generate a report from the results of a lint run
    fn generate_report(&self, report: &LintReport) -> Result<String, LoopDeLoopError>;
}

pub use github::GitHubReportGenerator;
pub use human::HumanReportGenerator;
pub use json::JsonReportGenerator;
pub use junit::JunitReportGenerator;

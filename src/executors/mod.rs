//! Command executors that handle the actual logic for each command

pub mod inspect;
pub mod spectacle;
pub mod spotlight;

use miette::{Result, WrapErr};

use crate::analyzer::{ImportCycleLinter, LintReport, RelativeResolver};
use crate::cli::OutputFormat;
use crate::config::LintSettings;
use crate::detector::CycleSession;
use crate::progress::ProgressReporter;
use crate::reports::{
    GitHubReportGenerator, HumanReportGenerator, JsonReportGenerator, JunitReportGenerator,
    ReportGenerator,
};
use crate::source_discovery::SourceDiscovery;

/// Trait for command executors
pub trait CommandExecutor {
    type Config;

    /// Execute the command with the given configuration
    fn execute(config: Self::Config) -> Result<()>;
}

/// Discover the configured sources and lint them all in one run
pub(crate) fn lint_sources(
    settings: &LintSettings,
    mut progress: Option<&mut ProgressReporter>,
) -> Result<(ImportCycleLinter, LintReport)> {
    let discovery = SourceDiscovery::new(settings.extensions.clone(), &settings.exclude)
        .wrap_err("Failed to prepare source discovery")?;

    if let Some(p) = progress.as_mut() {
        p.start_discovery();
    }
    let files = discovery
        .discover_all(&settings.paths, progress.as_deref())
        .wrap_err("Failed to discover source files")?;
    if let Some(p) = progress.as_mut() {
        p.finish_discovery(files.len());
    }

    let mut linter = ImportCycleLinter::new(
        CycleSession::new(settings.depth_limit),
        RelativeResolver::new(settings.extensions.clone()),
        settings.root.clone(),
    );
    let report = linter.lint_paths(&files, progress);

    Ok((linter, report))
}

/// Render `report` in the requested format
pub(crate) fn generate_report(
    format: OutputFormat,
    max_cycles: Option<usize>,
    report: &LintReport,
) -> Result<String> {
    let output = match format {
        OutputFormat::Human => HumanReportGenerator::new(max_cycles).generate_report(report),
        OutputFormat::Json => JsonReportGenerator::new().generate_report(report),
        OutputFormat::Junit => JunitReportGenerator::new().generate_report(report),
        OutputFormat::GitHub => GitHubReportGenerator::new().generate_report(report),
    };

    output.wrap_err("Failed to generate report")
}

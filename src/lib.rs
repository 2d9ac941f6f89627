//! # Loop-de-Loop - Find Circular Imports in TypeScript and JavaScript
//!
//! Loop-de-Loop is an incremental import-cycle detector. Files are presented
//! one at a time; each file's imports replace its previous edges in a shared
//! import graph, and a cycle is reported as soon as the file that closes it
//! is analyzed, exactly once per run.
//!
//! ## Main Components
//!
//! - **Core**: file identities, source locations and cycles
//! - **Graph**: the mutable import graph and its renderers
//! - **Detector**: reachability check, bounded cycle enumeration and
//!   duplicate suppression, bundled in a `CycleSession`
//! - **Analyzer**: import scanning, specifier resolution and the linter
//!   driver that produces diagnostics
//! - **Reports**: human-readable and machine-readable output
//!
//! ## Usage
//!
//! ### Linting a Project
//!
//! ```no_run
//! use std::path::PathBuf;
//!
//! use loop_de_loop::analyzer::ImportCycleLinter;
//! use loop_de_loop::reports::{HumanReportGenerator, ReportGenerator};
//! use loop_de_loop::source_discovery::SourceDiscovery;
//!
//! # fn main() -> miette::Result<()> {
//! let root = PathBuf::from("/path/to/your/project");
//!
//! // Step 1: Find the source files
//! let discovery = SourceDiscovery::new(vec!["ts".into(), "tsx".into()], &[])?;
//! let files = discovery.discover_all(&[root.clone()], None)?;
//!
//! // Step 2: Lint them in one run
//! let mut linter = ImportCycleLinter::with_defaults(50, Some(root));
//! let report = linter.lint_paths(&files, None);
//!
//! // Step 3: Report
//! if report.has_cycles() {
//!     println!("{}", HumanReportGenerator::new(Some(5)).generate_report(&report)?);
//! }
//!
//! // Step 4: Keep the graph, start a fresh run for the next round of edits
//! linter.finish_run();
//! # Ok(())
//! # }
//! ```
//!
//! ### Driving the Detector Directly
//!
//! ```
//! use loop_de_loop::core::{FileId, SourceLocation};
//! use loop_de_loop::detector::SharedSession;
//!
//! let session = SharedSession::default();
//! let a = FileId::new("/project/a.ts");
//! let b = FileId::new("/project/b.ts");
//!
//! assert!(session.analyze_file(&a, [(b.clone(), SourceLocation::new(0, 10))]).is_empty());
//! let cycles = session.analyze_file(&b, [(a.clone(), SourceLocation::new(0, 10))]);
//! assert_eq!(cycles.len(), 1);
//!
//! // Analyzing `a` again finds the same cycle, which was already reported
//! assert!(session.analyze_file(&a, [(b.clone(), SourceLocation::new(0, 10))]).is_empty());
//! ```

// Private modules
mod constants;
mod progress;
mod utils;

// Public modules
pub mod analyzer;
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod core;
pub mod detector;
pub mod error;
pub mod executors;
pub mod graph;
pub mod reports;
pub mod source_discovery;

/// Map `-v` occurrences to a log level; `RUST_LOG` wins when set
fn init_logging(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    // a second initialisation (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();
    init_logging(cli.verbose);

    execute_command(cli.command)
}

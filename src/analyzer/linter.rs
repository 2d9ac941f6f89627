use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use console::style;
use indicatif::{ParallelProgressIterator, ProgressBar};
use rayon::prelude::*;
use tracing::{debug, trace, warn};

use super::{CycleDiagnostic, LintReport, ModuleResolver, RelativeResolver, scan_imports};
use crate::core::{Cycle, FileId, ImportStatement, Resolution, SourceLocation};
use crate::detector::CycleSession;
use crate::error::LoopDeLoopError;
use crate::graph::ImportGraph;
use crate::progress::ProgressReporter;

type ScannedFile = (FileId, Arc<str>, Vec<ImportStatement>);

/// Feeds files into a [`CycleSession`] and turns what it finds into
/// diagnostics
///
/// The linter owns the session, so the graph survives between runs: linting
/// an edited file again replaces only that file's edges.
pub struct ImportCycleLinter<R = RelativeResolver> {
    session: CycleSession,
    resolver: R,
    root: Option<PathBuf>,
}

impl ImportCycleLinter<RelativeResolver> {
    pub fn with_defaults(depth_limit: usize, root: Option<PathBuf>) -> Self {
        Self::new(CycleSession::new(depth_limit), RelativeResolver::default(), root)
    }
}

impl<R: ModuleResolver> ImportCycleLinter<R> {
    pub fn new(session: CycleSession, resolver: R, root: Option<PathBuf>) -> Self {
        let root = root.map(|r| FileId::new(r).path().to_path_buf());
        Self {
            session,
            resolver,
            root,
        }
    }

    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    pub fn graph(&self) -> &ImportGraph {
        self.session.graph()
    }

    pub fn session(&self) -> &CycleSession {
        &self.session
    }

    /// Scan `source` for imports and lint `path` with them
    pub fn lint_source(&mut self, path: impl AsRef<Path>, source: &str) -> Vec<CycleDiagnostic> {
        let file = FileId::new(path);
        let imports = scan_imports(source);
        self.lint_imports(&file, &imports, Arc::from(source))
    }

    /// Replace `file`'s edges with its resolved `imports`, then report the
    /// cycles it closes that nobody reported yet this run
    pub fn lint_imports(
        &mut self,
        file: &FileId,
        imports: &[ImportStatement],
        source: Arc<str>,
    ) -> Vec<CycleDiagnostic> {
        self.session.begin_file(file);

        for import in imports {
            match self.resolver.resolve(&import.specifier, file) {
                Resolution::File(target) => {
                    self.session.add_import(file, &target, import.location);
                }
                Resolution::External => {
                    trace!(file = %file, specifier = %import.specifier, "Skipping external import");
                }
                Resolution::Unresolvable => {
                    trace!(file = %file, specifier = %import.specifier, "Skipping unresolvable import");
                }
            }
        }

        let cycles = self.session.check_file(file);
        debug!(file = %file, imports = imports.len(), cycles = cycles.len(), "Linted file");

        cycles
            .into_iter()
            .map(|cycle| self.diagnose(cycle, source.clone()))
            .collect()
    }

    /// Read, scan and lint `files`, in the order given
    ///
    /// Reading and scanning run in parallel behind a progress bar; graph
    /// updates happen one file at a time in the original order, so the same
    /// input always yields the same diagnostics. Unreadable files are reported
    /// and skipped.
    pub fn lint_paths(
        &mut self,
        files: &[FileId],
        mut progress: Option<&mut ProgressReporter>,
    ) -> LintReport {
        let reading = progress
            .as_mut()
            .map_or_else(ProgressBar::hidden, |p| p.start_reading(files.len()));
        let scanned = read_and_scan(files, &reading);
        reading.finish_and_clear();

        if let Some(p) = progress.as_mut() {
            p.start_linting(scanned.len());
        }

        let mut report = LintReport::new(self.root.clone());
        for (file, source, imports) in scanned {
            if let Some(p) = progress.as_ref() {
                p.update_lint_progress(&file.display_relative(self.root()));
            }
            let diagnostics = self.lint_imports(&file, &imports, source);
            report.files_checked += 1;
            report.diagnostics.extend(diagnostics);
        }

        if let Some(p) = progress.as_mut() {
            p.finish_linting();
        }

        report
    }

    /// Shortest cycles through `file` in the current graph, reported or not
    ///
    /// `source` is the text of `file`, used to anchor the diagnostics.
    pub fn spotlight(&self, file: &FileId, source: Arc<str>) -> Vec<CycleDiagnostic> {
        self.session
            .cycles_through(file)
            .into_iter()
            .map(|cycle| self.diagnose(cycle, source.clone()))
            .collect()
    }

    /// End the run: forget what was reported, keep the graph
    pub fn finish_run(&mut self) {
        self.session.end_run();
    }

    /// Drop the graph and everything reported
    pub fn reset(&mut self) {
        self.session.reset();
    }

    fn diagnose(&self, cycle: Cycle, source: Arc<str>) -> CycleDiagnostic {
        let location = self.anchor(&cycle);
        CycleDiagnostic::new(cycle, location, source, self.root())
    }

    /// The import in the triggering file that leads into the cycle
    fn anchor(&self, cycle: &Cycle) -> SourceLocation {
        cycle
            .edges()
            .next()
            .and_then(|(from, to)| self.session.graph().edge(from, to))
            .map(|edge| edge.location)
            .unwrap_or_default()
    }
}

fn read_and_scan(files: &[FileId], bar: &ProgressBar) -> Vec<ScannedFile> {
    files
        .par_iter()
        .progress_with(bar.clone())
        .filter_map(|file| match fs::read_to_string(file.path()) {
            Ok(text) => {
                let imports = scan_imports(&text);
                Some((file.clone(), Arc::from(text), imports))
            }
            Err(source) => {
                let error = LoopDeLoopError::FileReadError {
                    path: file.path().to_path_buf(),
                    source,
                };
                warn!(file = %file, error = %error, "Skipping unreadable file");
                eprintln!("{} {}", style("⚠").yellow(), error);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    /// Resolves `./name` to `/project/name.ts` without touching the disk
    struct MapResolver;

    impl ModuleResolver for MapResolver {
        fn resolve(&self, specifier: &str, _importing_file: &FileId) -> Resolution {
            match specifier.strip_prefix("./") {
                Some(name) => Resolution::File(file(&format!("{name}.ts"))),
                None => Resolution::External,
            }
        }
    }

    fn file(name: &str) -> FileId {
        FileId::new(format!("/project/{name}"))
    }

    fn linter() -> ImportCycleLinter<MapResolver> {
        ImportCycleLinter::new(CycleSession::default(), MapResolver, Some(PathBuf::from("/project")))
    }

    #[test]
    fn test_two_file_cycle_anchored_at_closing_import() {
        let mut linter = linter();
        assert!(linter.lint_source("/project/x.ts", "import { y } from './y';\n").is_empty());

        let y_source = "// y\nimport { x } from './x';\n";
        let diagnostics = linter.lint_source("/project/y.ts", y_source);

        assert_eq!(diagnostics.len(), 1);
        let diagnostic = &diagnostics[0];
        assert_eq!(diagnostic.file, file("y.ts"));
        assert_eq!(diagnostic.message, "circular import detected: y.ts -> x.ts -> y.ts");
        assert_eq!(diagnostic.snippet(), "import { x } from './x'");
        assert_eq!(diagnostic.location.line, 2);
    }

    #[test]
    fn test_external_imports_never_form_cycles() {
        let mut linter = linter();
        assert!(linter.lint_source("/project/a.ts", "import React from 'react'").is_empty());
        assert!(linter.graph().is_empty());
    }

    #[test]
    fn test_acyclic_chain_is_clean() {
        let mut linter = linter();
        for (name, source) in [
            ("/project/a.ts", "import './b'"),
            ("/project/b.ts", "import './c'"),
            ("/project/c.ts", "export const c = 1"),
        ] {
            assert!(linter.lint_source(name, source).is_empty());
        }
        assert_eq!(linter.graph().edge_count(), 2);
    }

    #[test]
    fn test_finish_run_reports_again_on_next_run() {
        let mut linter = linter();
        linter.lint_source("/project/a.ts", "import './b'");
        assert_eq!(linter.lint_source("/project/b.ts", "import './a'").len(), 1);
        assert!(linter.lint_source("/project/a.ts", "import './b'").is_empty());

        linter.finish_run();
        assert_eq!(linter.lint_source("/project/a.ts", "import './b'").len(), 1);
    }

    #[test]
    fn test_edit_breaks_cycle() {
        let mut linter = linter();
        linter.lint_source("/project/a.ts", "import './b'");
        linter.lint_source("/project/b.ts", "import './a'");
        linter.finish_run();

        assert!(linter.lint_source("/project/b.ts", "export {}").is_empty());
        assert!(linter.lint_source("/project/a.ts", "import './b'").is_empty());
    }

    #[test]
    fn test_reset_forgets_graph() {
        let mut linter = linter();
        linter.lint_source("/project/a.ts", "import './b'");
        linter.reset();
        assert!(linter.graph().is_empty());
        assert!(linter.lint_source("/project/b.ts", "import './a'").is_empty());
    }

    #[test]
    fn test_spotlight_ignores_deduplication() {
        let mut linter = linter();
        linter.lint_source("/project/a.ts", "import './b'");
        linter.lint_source("/project/b.ts", "import './a'");

        let diagnostics = linter.spotlight(&file("a.ts"), Arc::from("import './b'"));
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "circular import detected: a.ts -> b.ts -> a.ts");
        assert_eq!(diagnostics[0].snippet(), "import './b'");
    }

    #[test]
    fn test_lint_paths_reads_files_from_disk() {
        let temp = TempDir::new().unwrap();
        let sources = HashMap::from([
            ("a.ts", "import { b } from './b';\n"),
            ("b.ts", "import { c } from './c';\n"),
            ("c.ts", "import { a } from './a';\n"),
        ]);
        for (name, text) in &sources {
            fs::write(temp.path().join(name), text).unwrap();
        }

        let mut files: Vec<FileId> = sources.keys().map(|n| FileId::new(temp.path().join(n))).collect();
        files.push(FileId::new(temp.path().join("missing.ts")));
        files.sort();

        let mut linter = ImportCycleLinter::with_defaults(50, Some(temp.path().to_path_buf()));
        let report = linter.lint_paths(&files, None);

        assert_eq!(report.files_checked, 3);
        assert_eq!(report.cycle_count(), 1);
        assert_eq!(
            report.diagnostics[0].message,
            "circular import detected: c.ts -> a.ts -> b.ts -> c.ts"
        );
    }

    #[test]
    fn test_lint_paths_with_progress_matches_plain_run() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.ts"), "import './b';\n").unwrap();
        fs::write(temp.path().join("b.ts"), "import './a';\n").unwrap();
        let files = vec![
            FileId::new(temp.path().join("a.ts")),
            FileId::new(temp.path().join("b.ts")),
        ];

        let root = Some(temp.path().to_path_buf());
        let plain = ImportCycleLinter::with_defaults(50, root.clone()).lint_paths(&files, None);

        let mut progress = ProgressReporter::new();
        let shown = ImportCycleLinter::with_defaults(50, root).lint_paths(&files, Some(&mut progress));

        assert_eq!(shown.files_checked, plain.files_checked);
        assert_eq!(
            shown.diagnostics.iter().map(|d| &d.message).collect::<Vec<_>>(),
            plain.diagnostics.iter().map(|d| &d.message).collect::<Vec<_>>()
        );
        assert_eq!(shown.cycle_count(), 1);
    }
}

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::constants::output::CYCLE_MESSAGE_PREFIX;
use crate::core::{Cycle, FileId, SourceLocation};

/// One reported import cycle, anchored at the import that closes it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleDiagnostic {
    /// The file whose analysis surfaced the cycle
    pub file: FileId,
    /// The import statement in `file` leading into the cycle
    pub location: SourceLocation,
    pub cycle: Cycle,
    pub message: String,
    /// Full text of `file`, shared between its diagnostics
    pub source: Arc<str>,
}

impl CycleDiagnostic {
    pub fn new(cycle: Cycle, location: SourceLocation, source: Arc<str>, root: Option<&Path>) -> Self {
        let message = format!("{CYCLE_MESSAGE_PREFIX}: {}", cycle.render(root));
        // an empty cycle never leaves the enumerator
        let file = cycle.trigger().cloned().unwrap_or_else(|| FileId::new("/"));
        Self {
            file,
            location,
            cycle,
            message,
            source,
        }
    }

    /// The text of the anchoring import statement
    pub fn snippet(&self) -> &str {
        let start = self.location.offset.min(self.source.len());
        let end = (self.location.offset + self.location.length).min(self.source.len());
        self.source.get(start..end).unwrap_or_default()
    }
}

/// Everything one lint run produced
#[derive(Debug, Clone, Default)]
pub struct LintReport {
    pub files_checked: usize,
    pub diagnostics: Vec<CycleDiagnostic>,
    /// Directory that reported paths are relative to
    pub root: Option<PathBuf>,
}

impl LintReport {
    pub fn new(root: Option<PathBuf>) -> Self {
        Self {
            files_checked: 0,
            diagnostics: Vec::new(),
            root,
        }
    }

    pub fn has_cycles(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    pub fn cycle_count(&self) -> usize {
        self.diagnostics.len()
    }

    /// Path of `file` as it should appear in output
    pub fn display_path(&self, file: &FileId) -> String {
        file.display_relative(self.root.as_deref())
    }

    /// Diagnostics grouped by file, files in path order
    pub fn by_file(&self) -> Vec<(&FileId, Vec<&CycleDiagnostic>)> {
        let mut grouped: BTreeMap<&FileId, Vec<&CycleDiagnostic>> = BTreeMap::new();
        for diagnostic in &self.diagnostics {
            grouped.entry(&diagnostic.file).or_default().push(diagnostic);
        }
        grouped.into_iter().collect()
    }
}

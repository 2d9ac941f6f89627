use std::path::{Path, PathBuf};

use glob::Pattern;
use miette::Result;
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::constants::sources::SKIPPED_DIRS;
use crate::core::FileId;
use crate::error::LoopDeLoopError;
use crate::progress::ProgressReporter;

/// Finds the source files to lint below a set of paths
pub struct SourceDiscovery {
    extensions: Vec<String>,
    excludes: Vec<Pattern>,
}

impl SourceDiscovery {
    pub fn new(extensions: Vec<String>, exclude: &[String]) -> Result<Self> {
        let excludes = exclude
            .iter()
            .map(|glob| {
                Pattern::new(glob).map_err(|e| LoopDeLoopError::ConfigurationError {
                    message: format!("Invalid exclude pattern '{glob}': {e}"),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            extensions,
            excludes,
        })
    }

    /// Every matching source file under `paths`, sorted and without
    /// duplicates
    ///
    /// Paths that do not exist are reported and skipped.
    pub fn discover_all(
        &self,
        paths: &[PathBuf],
        progress: Option<&ProgressReporter>,
    ) -> Result<Vec<FileId>> {
        let mut files = Vec::new();

        for path in paths {
            if !path.exists() {
                eprintln!(
                    "{} Path '{}' does not exist",
                    console::style("⚠").yellow(),
                    path.display()
                );
                continue;
            }

            if let Some(p) = progress {
                p.scanning_path(path);
            }

            self.discover_in_path(path, &mut files);
        }

        files.sort();
        files.dedup();
        debug!(count = files.len(), "Discovered source files");

        Ok(files)
    }

    fn discover_in_path(&self, path: &Path, files: &mut Vec<FileId>) {
        let walker = WalkDir::new(path)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_skipped_dir(e));

        for entry in walker.filter_map(|e| e.ok()) {
            if !entry.file_type().is_file() || !self.is_source(entry.path()) {
                continue;
            }

            let relative = entry.path().strip_prefix(path).unwrap_or(entry.path());
            if self.is_excluded(relative) || self.is_excluded(entry.path()) {
                debug!(path = %entry.path().display(), "Excluded by pattern");
                continue;
            }

            files.push(FileId::new(entry.path()));
        }
    }

    fn is_source(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        self.extensions
            .iter()
            .any(|ext| name.len() > ext.len() + 1 && name.ends_with(&format!(".{ext}")))
    }

    fn is_excluded(&self, path: &Path) -> bool {
        self.excludes.iter().any(|pattern| pattern.matches_path(path))
    }
}

fn is_skipped_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| SKIPPED_DIRS.contains(&name))
}

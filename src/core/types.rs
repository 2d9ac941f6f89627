//! Core type definitions
//!
//! This module contains the basic data structures shared by the import graph,
//! the cycle detector and the linter, with minimal logic - focusing on data
//! representation.

use std::fmt;
use std::path::{Component, Path, PathBuf};

/// Canonical identity of a source file: an absolute, lexically normalized path
///
/// Two specifiers that resolve to the same `FileId` refer to the same node in
/// the import graph. Normalization is purely lexical (`.` and `..` are folded,
/// symlinks are not followed), so building a `FileId` never touches the file
/// system.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId(PathBuf);

impl FileId {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let absolute = if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().unwrap_or_default().join(path)
        };
        Self(normalize(&absolute))
    }

    pub fn path(&self) -> &Path {
        &self.0
    }

    /// Render the path relative to `root`, or absolute when `root` is `None`
    /// or the file lies outside of it
    pub fn display_relative(&self, root: Option<&Path>) -> String {
        root.and_then(|root| self.0.strip_prefix(root).ok())
            .filter(|rel| !rel.as_os_str().is_empty())
            .unwrap_or(&self.0)
            .display()
            .to_string()
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

impl AsRef<Path> for FileId {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `pop` on a root is a no-op, which is what we want for "/.."
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

/// Location of an import statement inside its source file
///
/// `offset` and `length` are byte based; `line` and `column` are 1-based and
/// only informational (0 when unknown).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SourceLocation {
    pub offset: usize,
    pub length: usize,
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(offset: usize, length: usize) -> Self {
        Self {
            offset,
            length,
            line: 0,
            column: 0,
        }
    }

    pub fn with_position(mut self, line: usize, column: usize) -> Self {
        self.line = line;
        self.column = column;
        self
    }
}

impl From<SourceLocation> for miette::SourceSpan {
    fn from(location: SourceLocation) -> Self {
        miette::SourceSpan::new(location.offset.into(), location.length)
    }
}

/// A directed `from → to` import, remembering the statement that created it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportEdge {
    pub from: FileId,
    pub to: FileId,
    pub location: SourceLocation,
}

/// One import statement as it appears in a source file, before resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportStatement {
    pub specifier: String,
    pub location: SourceLocation,
}

impl ImportStatement {
    pub fn new(specifier: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            specifier: specifier.into(),
            location,
        }
    }
}

/// Outcome of resolving a module specifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A file that belongs to the project
    File(FileId),
    /// A third-party package or anything else outside the project
    External,
    /// A relative specifier that points nowhere
    Unresolvable,
}

/// A closed walk through the import graph
///
/// The first member is the file whose imports triggered detection; the edge
/// from the last member back to the first is implied. No member repeats.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cycle {
    members: Vec<FileId>,
}

impl Cycle {
    pub fn new(members: Vec<FileId>) -> Self {
        Self { members }
    }

    pub fn members(&self) -> &[FileId] {
        &self.members
    }

    /// The file the cycle starts and ends at
    pub fn trigger(&self) -> Option<&FileId> {
        self.members.first()
    }

    /// Number of edges (and members) in the cycle
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, file: &FileId) -> bool {
        self.members.contains(file)
    }

    /// Consecutive `(from, to)` pairs, including the closing edge
    pub fn edges(&self) -> impl Iterator<Item = (&FileId, &FileId)> + '_ {
        let n = self.members.len();
        (0..n).map(move |i| (&self.members[i], &self.members[(i + 1) % n]))
    }

    /// `a.ts -> b.ts -> a.ts`, with paths rendered relative to `root`
    pub fn render(&self, root: Option<&Path>) -> String {
        self.members
            .iter()
            .chain(self.members.first())
            .map(|file| file.display_relative(root))
            .collect::<Vec<_>>()
            .join(" -> ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_id_normalizes_dot_segments() {
        let id = FileId::new("/project/src/./utils/../index.ts");
        assert_eq!(id.path(), Path::new("/project/src/index.ts"));
    }

    #[test]
    fn test_file_id_equality_after_normalization() {
        assert_eq!(
            FileId::new("/project/a/../b.ts"),
            FileId::new("/project/b.ts")
        );
    }

    #[test]
    fn test_file_id_relative_input_becomes_absolute() {
        assert!(FileId::new("src/a.ts").path().is_absolute());
    }

    #[test]
    fn test_display_relative() {
        let id = FileId::new("/project/src/a.ts");
        assert_eq!(id.display_relative(Some(Path::new("/project"))), "src/a.ts");
        assert_eq!(id.display_relative(None), "/project/src/a.ts");
        assert_eq!(
            id.display_relative(Some(Path::new("/elsewhere"))),
            "/project/src/a.ts"
        );
    }

    #[test]
    fn test_cycle_render_closes_loop() {
        let cycle = Cycle::new(vec![FileId::new("/p/y.ts"), FileId::new("/p/x.ts")]);
        assert_eq!(cycle.render(Some(Path::new("/p"))), "y.ts -> x.ts -> y.ts");
    }

    #[test]
    fn test_cycle_edges_include_closing_edge() {
        let a = FileId::new("/p/a.ts");
        let b = FileId::new("/p/b.ts");
        let cycle = Cycle::new(vec![a.clone(), b.clone()]);
        let edges: Vec<_> = cycle.edges().collect();
        assert_eq!(edges, vec![(&a, &b), (&b, &a)]);
    }

    #[test]
    fn test_self_loop_cycle() {
        let a = FileId::new("/p/a.ts");
        let cycle = Cycle::new(vec![a.clone()]);
        assert_eq!(cycle.len(), 1);
        assert_eq!(cycle.edges().collect::<Vec<_>>(), vec![(&a, &a)]);
        assert_eq!(cycle.render(None), "/p/a.ts -> /p/a.ts");
    }
}

//! Module specifier resolution

use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

use crate::constants::sources::{DEFAULT_EXTENSIONS, INDEX_STEM, PACKAGE_DIR};
use crate::core::{FileId, Resolution};

/// Turns a module specifier into a project file, when there is one
///
/// This is the seam for richer resolution strategies (path mapping, package
/// exports). Implementations must be cheap to share across threads.
pub trait ModuleResolver: Send + Sync {
    fn resolve(&self, specifier: &str, importing_file: &FileId) -> Resolution;
}

/// Resolves relative specifiers against the file system
///
/// Bare specifiers (`react`, `@scope/pkg`) are external packages. A relative
/// specifier is probed as: the exact path, the path with each extension
/// appended, a `.js`-style suffix swapped for its TypeScript counterpart, and
/// finally `index.<ext>` inside the directory.
#[derive(Debug, Clone)]
pub struct RelativeResolver {
    extensions: Vec<String>,
}

impl Default for RelativeResolver {
    fn default() -> Self {
        Self::new(DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect())
    }
}

impl RelativeResolver {
    pub fn new(extensions: Vec<String>) -> Self {
        Self { extensions }
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    fn candidates(&self, base: &Path) -> Vec<PathBuf> {
        let mut candidates = vec![base.to_path_buf()];

        // append rather than replace, so `./case1.2` still finds `case1.2.ts`
        candidates.extend(self.extensions.iter().map(|ext| with_suffix(base, ext)));

        if let Some(stem) = strip_js_suffix(base) {
            candidates.extend(
                ["ts", "tsx", "d.ts"]
                    .into_iter()
                    .map(|ext| with_suffix(&stem, ext)),
            );
        }

        candidates.extend(
            self.extensions
                .iter()
                .map(|ext| base.join(format!("{INDEX_STEM}.{ext}"))),
        );

        candidates
    }
}

impl ModuleResolver for RelativeResolver {
    fn resolve(&self, specifier: &str, importing_file: &FileId) -> Resolution {
        if !is_relative(specifier) {
            return Resolution::External;
        }

        let dir = importing_file
            .path()
            .parent()
            .unwrap_or_else(|| Path::new("/"));
        let base = dir.join(specifier);

        for candidate in self.candidates(&base) {
            if candidate.is_file() {
                let file = FileId::new(&candidate);
                if in_package_dir(file.path()) {
                    return Resolution::External;
                }
                return Resolution::File(file);
            }
        }

        Resolution::Unresolvable
    }
}

fn is_relative(specifier: &str) -> bool {
    specifier == "."
        || specifier == ".."
        || specifier.starts_with("./")
        || specifier.starts_with("../")
        || specifier.starts_with('/')
}

fn with_suffix(path: &Path, ext: &str) -> PathBuf {
    let mut os: OsString = path.as_os_str().to_owned();
    os.push(".");
    os.push(ext);
    PathBuf::from(os)
}

/// `foo.js` → `foo`, for `.js`/`.jsx`/`.mjs`/`.cjs` specifiers of TS sources
fn strip_js_suffix(path: &Path) -> Option<PathBuf> {
    let ext = path.extension()?.to_str()?;
    matches!(ext, "js" | "jsx" | "mjs" | "cjs").then(|| path.with_extension(""))
}

fn in_package_dir(path: &Path) -> bool {
    path.components()
        .any(|c| matches!(c, Component::Normal(name) if name == PACKAGE_DIR))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn project(files: &[&str]) -> TempDir {
        let temp = TempDir::new().unwrap();
        for file in files {
            let path = temp.path().join(file);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, "").unwrap();
        }
        temp
    }

    fn resolve(temp: &TempDir, from: &str, specifier: &str) -> Resolution {
        RelativeResolver::default().resolve(specifier, &FileId::new(temp.path().join(from)))
    }

    fn file(temp: &TempDir, name: &str) -> Resolution {
        Resolution::File(FileId::new(temp.path().join(name)))
    }

    #[test]
    fn test_bare_specifiers_are_external() {
        let temp = project(&["a.ts"]);
        assert_eq!(resolve(&temp, "a.ts", "react"), Resolution::External);
        assert_eq!(resolve(&temp, "a.ts", "@scope/pkg"), Resolution::External);
    }

    #[test]
    fn test_extension_is_appended() {
        let temp = project(&["a.ts", "b.ts"]);
        assert_eq!(resolve(&temp, "a.ts", "./b"), file(&temp, "b.ts"));
    }

    #[test]
    fn test_dotted_file_names_keep_their_suffix() {
        let temp = project(&["case1.ts", "case1.2.ts"]);
        assert_eq!(resolve(&temp, "case1.ts", "./case1.2"), file(&temp, "case1.2.ts"));
    }

    #[test]
    fn test_directory_resolves_to_index() {
        let temp = project(&["a.ts", "lib/index.ts"]);
        assert_eq!(resolve(&temp, "a.ts", "./lib"), file(&temp, "lib/index.ts"));
        assert_eq!(resolve(&temp, "lib/index.ts", ".."), Resolution::Unresolvable);
    }

    #[test]
    fn test_parent_directory_specifier() {
        let temp = project(&["src/deep/a.ts", "src/b.tsx"]);
        assert_eq!(resolve(&temp, "src/deep/a.ts", "../b"), file(&temp, "src/b.tsx"));
    }

    #[test]
    fn test_js_suffix_maps_to_typescript_source() {
        let temp = project(&["a.ts", "b.ts"]);
        assert_eq!(resolve(&temp, "a.ts", "./b.js"), file(&temp, "b.ts"));
    }

    #[test]
    fn test_exact_file_wins() {
        let temp = project(&["a.ts", "data.json"]);
        assert_eq!(resolve(&temp, "a.ts", "./data.json"), file(&temp, "data.json"));
    }

    #[test]
    fn test_missing_file_is_unresolvable() {
        let temp = project(&["a.ts"]);
        assert_eq!(resolve(&temp, "a.ts", "./missing"), Resolution::Unresolvable);
    }

    #[test]
    fn test_node_modules_is_external() {
        let temp = project(&["a.ts", "node_modules/pkg/index.ts"]);
        assert_eq!(
            resolve(&temp, "a.ts", "./node_modules/pkg"),
            Resolution::External
        );
    }
}

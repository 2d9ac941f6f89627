//! `loop-de-loop.toml` project configuration

use std::path::{Path, PathBuf};

use miette::{NamedSource, SourceSpan};
use serde::Deserialize;

use crate::constants::config_file::DEFAULT_FILE_NAME;
use crate::error::{ConfigParseError, LoopDeLoopError};

/// Settings read from the configuration file; everything is optional
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub root: Option<PathBuf>,
    pub depth_limit: Option<usize>,
    pub extensions: Option<Vec<String>>,
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl FileConfig {
    pub fn parse_file(path: &Path) -> Result<Self, LoopDeLoopError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| LoopDeLoopError::FileReadError {
                path: path.to_path_buf(),
                source: e,
            })?;

        let mut config = Self::parse_str(&content, &path.display().to_string())?;

        // a relative root is relative to the file, not to the working directory
        if let Some(root) = config.root.take() {
            let base = path.parent().unwrap_or_else(|| Path::new("."));
            config.root = Some(if root.is_absolute() {
                root
            } else {
                base.join(root)
            });
        }

        Ok(config)
    }

    pub fn parse_str(content: &str, name: &str) -> Result<Self, LoopDeLoopError> {
        toml::from_str(content).map_err(|e| {
            let span = e
                .span()
                .map(|span| SourceSpan::new(span.start.into(), span.end - span.start));

            LoopDeLoopError::ConfigParseError(Box::new(ConfigParseError {
                file: name.to_string(),
                source_code: NamedSource::new(name, content.to_string()),
                span,
                source: e,
            }))
        })
    }

    /// Load `explicit`, or `loop-de-loop.toml` from the working directory
    /// when it exists
    ///
    /// A missing explicit file is an error; a missing default file is not.
    pub fn load(explicit: Option<&Path>) -> Result<Self, LoopDeLoopError> {
        match explicit {
            Some(path) => Self::parse_file(path),
            None => {
                let default = Path::new(DEFAULT_FILE_NAME);
                if default.is_file() {
                    Self::parse_file(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use miette::Diagnostic;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_parse_all_keys() {
        let config = FileConfig::parse_str(
            r#"
root = "/repo"
depth_limit = 12
extensions = ["ts", "tsx"]
exclude = ["**/*.test.ts"]
"#,
            "loop-de-loop.toml",
        )
        .unwrap();

        assert_eq!(
            config,
            FileConfig {
                root: Some(PathBuf::from("/repo")),
                depth_limit: Some(12),
                extensions: Some(vec!["ts".to_string(), "tsx".to_string()]),
                exclude: vec!["**/*.test.ts".to_string()],
            }
        );
    }

    #[test]
    fn test_empty_file_is_all_defaults() {
        assert_eq!(
            FileConfig::parse_str("", "loop-de-loop.toml").unwrap(),
            FileConfig::default()
        );
    }

    #[test]
    fn test_unknown_key_is_rejected_with_span() {
        let err = FileConfig::parse_str("depth_limt = 3\n", "loop-de-loop.toml").unwrap_err();
        match &err {
            LoopDeLoopError::ConfigParseError(parse) => {
                assert!(parse.span.is_some());
                assert_eq!(parse.file, "loop-de-loop.toml");
            }
            other => panic!("Expected ConfigParseError, got {other:?}"),
        }
        assert!(err.code().is_some());
    }

    #[test]
    fn test_relative_root_is_relative_to_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("loop-de-loop.toml");
        fs::write(&path, "root = \"src\"\n").unwrap();

        let config = FileConfig::parse_file(&path).unwrap();
        assert_eq!(config.root, Some(temp.path().join("src")));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let result = FileConfig::load(Some(&temp.path().join("nope.toml")));
        assert!(matches!(result, Err(LoopDeLoopError::FileReadError { .. })));
    }
}

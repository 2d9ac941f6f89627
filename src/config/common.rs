//! Settings shared by every command that builds the import graph

use std::path::PathBuf;

use crate::common::{CommonArgs, CycleDisplayArgs};
use crate::constants::search::DEFAULT_DEPTH_LIMIT;
use crate::constants::sources::DEFAULT_EXTENSIONS;
use crate::error::LoopDeLoopError;

use super::FileConfig;

/// Where to look, what to look at and how deep to search
#[derive(Debug, Clone, PartialEq)]
pub struct LintSettings {
    pub paths: Vec<PathBuf>,
    pub root: Option<PathBuf>,
    pub depth_limit: usize,
    pub extensions: Vec<String>,
    pub exclude: Vec<String>,
}

impl Default for LintSettings {
    fn default() -> Self {
        Self {
            paths: vec![PathBuf::from(".")],
            root: None,
            depth_limit: DEFAULT_DEPTH_LIMIT,
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            exclude: Vec::new(),
        }
    }
}

impl LintSettings {
    /// Command line flags over the configuration file over defaults
    ///
    /// Exclude globs from both sources are combined. Without an explicit root
    /// the current directory is used.
    pub fn merge(
        common: &CommonArgs,
        search: &CycleDisplayArgs,
        file: FileConfig,
    ) -> Result<Self, LoopDeLoopError> {
        let defaults = Self::default();

        let depth_limit = search
            .depth_limit
            .or(file.depth_limit)
            .unwrap_or(defaults.depth_limit);
        if depth_limit == 0 {
            return Err(LoopDeLoopError::ConfigurationError {
                message: "depth_limit must be greater than zero".to_string(),
            });
        }

        let extensions: Vec<String> = common
            .extensions
            .clone()
            .or(file.extensions)
            .unwrap_or(defaults.extensions)
            .into_iter()
            .map(|ext| ext.trim().trim_start_matches('.').to_string())
            .filter(|ext| !ext.is_empty())
            .collect();
        if extensions.is_empty() {
            return Err(LoopDeLoopError::ConfigurationError {
                message: "at least one source extension is required".to_string(),
            });
        }

        let mut exclude = file.exclude;
        exclude.extend(common.exclude.iter().cloned());

        let root = common
            .root
            .clone()
            .or(file.root)
            .or_else(|| std::env::current_dir().ok());

        Ok(Self {
            paths: common.get_paths(),
            root,
            depth_limit,
            extensions,
            exclude,
        })
    }

    /// Merge with the configuration file named by `--config`, or the default
    /// one when present
    pub fn from_args(
        common: &CommonArgs,
        search: &CycleDisplayArgs,
    ) -> Result<Self, LoopDeLoopError> {
        let file = FileConfig::load(common.config.as_deref())?;
        Self::merge(common, search, file)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn file_config() -> FileConfig {
        FileConfig {
            root: Some(PathBuf::from("/from-file")),
            depth_limit: Some(7),
            extensions: Some(vec!["ts".to_string()]),
            exclude: vec!["generated/**".to_string()],
        }
    }

    #[test]
    fn test_defaults_without_flags_or_file() {
        let settings = LintSettings::merge(
            &CommonArgs::default(),
            &CycleDisplayArgs::default(),
            FileConfig::default(),
        )
        .unwrap();

        assert_eq!(settings.depth_limit, DEFAULT_DEPTH_LIMIT);
        assert_eq!(settings.extensions.len(), DEFAULT_EXTENSIONS.len());
        assert!(settings.exclude.is_empty());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let settings = LintSettings::merge(
            &CommonArgs::default(),
            &CycleDisplayArgs::default(),
            file_config(),
        )
        .unwrap();

        assert_eq!(settings.depth_limit, 7);
        assert_eq!(settings.root, Some(PathBuf::from("/from-file")));
        assert_eq!(settings.extensions, vec!["ts"]);
    }

    #[test]
    fn test_flags_override_file() {
        let common = CommonArgs {
            root: Some(PathBuf::from("/from-flag")),
            extensions: Some(vec![".tsx".to_string(), "mts".to_string()]),
            exclude: vec!["*.spec.ts".to_string()],
            ..CommonArgs::default()
        };
        let search = CycleDisplayArgs {
            depth_limit: Some(3),
            max_cycles: None,
        };

        let settings = LintSettings::merge(&common, &search, file_config()).unwrap();

        assert_eq!(settings.depth_limit, 3);
        assert_eq!(settings.root, Some(PathBuf::from("/from-flag")));
        assert_eq!(settings.extensions, vec!["tsx", "mts"]);
        assert_eq!(settings.exclude, vec!["generated/**", "*.spec.ts"]);
    }

    #[test]
    fn test_zero_depth_limit_is_rejected() {
        let search = CycleDisplayArgs {
            depth_limit: Some(0),
            max_cycles: None,
        };
        let err = LintSettings::merge(&CommonArgs::default(), &search, FileConfig::default())
            .unwrap_err();
        assert!(matches!(err, LoopDeLoopError::ConfigurationError { .. }));
    }
}

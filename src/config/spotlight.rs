//! Spotlight command configuration

use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::config::LintSettings;
use crate::impl_builder;

#[derive(Debug, Clone)]
pub struct SpotlightConfig {
    /// The file whose cycles are listed
    pub file: PathBuf,
    pub settings: LintSettings,
    pub format: OutputFormat,
    pub max_cycles: Option<usize>,
}

impl SpotlightConfig {
    pub fn builder() -> SpotlightConfigBuilder {
        SpotlightConfigBuilder::new()
    }
}

impl_builder! {
    SpotlightConfigBuilder => SpotlightConfig {
        with_file => file: PathBuf,
        with_settings => settings: LintSettings,
        with_format => format: OutputFormat,
        with_max_cycles => max_cycles: Option<usize>,
    }
}

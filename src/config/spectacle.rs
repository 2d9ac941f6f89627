//! Spectacle command configuration

use std::path::PathBuf;

use crate::cli::GraphFormat;
use crate::config::LintSettings;
use crate::impl_builder;

#[derive(Debug, Clone)]
pub struct SpectacleConfig {
    pub settings: LintSettings,
    pub format: GraphFormat,
    /// Output file (stdout when `None`)
    pub output: Option<PathBuf>,
    pub highlight_cycles: bool,
}

impl SpectacleConfig {
    pub fn builder() -> SpectacleConfigBuilder {
        SpectacleConfigBuilder::new()
    }
}

impl_builder! {
    SpectacleConfigBuilder => SpectacleConfig {
        with_settings => settings: LintSettings,
        with_format => format: GraphFormat,
        with_output => output: Option<PathBuf>,
        with_highlight_cycles => highlight_cycles: bool,
    }
}

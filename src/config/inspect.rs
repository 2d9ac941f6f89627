//! Inspect command configuration

use crate::cli::OutputFormat;
use crate::config::LintSettings;
use crate::impl_builder;

/// Configuration for the inspect command
///
/// Lints every discovered source file and reports each circular import once.
#[derive(Debug, Clone)]
pub struct InspectConfig {
    pub settings: LintSettings,
    /// Output format for the report
    pub format: OutputFormat,
    /// Whether to exit with error code if cycles are found
    pub error_on_cycles: bool,
    /// Maximum number of cycles to report (None = all)
    pub max_cycles: Option<usize>,
}

impl InspectConfig {
    pub fn builder() -> InspectConfigBuilder {
        InspectConfigBuilder::new()
    }
}

impl_builder! {
    InspectConfigBuilder => InspectConfig {
        with_settings => settings: LintSettings,
        with_format => format: OutputFormat,
        with_error_on_cycles => error_on_cycles: bool,
        with_max_cycles => max_cycles: Option<usize>,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ConfigBuilder;

    #[test]
    fn test_missing_format_is_reported() {
        let err = InspectConfig::builder()
            .with_settings(LintSettings::default())
            .with_error_on_cycles(false)
            .with_max_cycles(Some(3))
            .build()
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Configuration error: Missing required field: format"
        );
    }
}

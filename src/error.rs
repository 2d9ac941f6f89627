use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid configuration file '{file}'")]
#[diagnostic(
    code(loop_de_loop::config_parse_error),
    help("Check the TOML syntax and key names near the highlighted position")
)]
pub struct ConfigParseError {
    pub file: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("problem here")]
    pub span: Option<SourceSpan>,
    #[source]
    pub source: toml::de::Error,
}

#[derive(Error, Debug, Diagnostic)]
pub enum LoopDeLoopError {
    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(loop_de_loop::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    ConfigParseError(Box<ConfigParseError>),

    #[error("JSON serialization error")]
    #[diagnostic(
        code(loop_de_loop::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(loop_de_loop::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(
        code(loop_de_loop::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(loop_de_loop::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },
}

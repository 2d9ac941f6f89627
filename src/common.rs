//! Common functionality shared across commands

use std::path::PathBuf;

use clap::Args;

/// Common arguments shared by multiple commands
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Files or directories to lint (defaults to current directory)
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Directory that reported paths are shown relative to
    #[arg(long, value_name = "DIR", env = "LOOP_DE_LOOP_ROOT")]
    pub root: Option<PathBuf>,

    /// Glob of files to leave out (repeatable)
    #[arg(long, value_name = "GLOB", env = "LOOP_DE_LOOP_EXCLUDE", value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// Source file extensions, comma separated
    #[arg(long, value_name = "LIST", env = "LOOP_DE_LOOP_EXTENSIONS", value_delimiter = ',')]
    pub extensions: Option<Vec<String>>,

    /// Configuration file (defaults to ./loop-de-loop.toml when present)
    #[arg(long, value_name = "FILE", env = "LOOP_DE_LOOP_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Common output format arguments
#[derive(Args, Debug, Clone)]
pub struct FormatArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = crate::constants::output::DEFAULT_FORMAT, env = "LOOP_DE_LOOP_FORMAT")]
    pub format: crate::cli::OutputFormat,
}

/// Common cycle search and display arguments
#[derive(Args, Debug, Clone, Default)]
pub struct CycleDisplayArgs {
    /// Longest cycle, in imports, to look for
    #[arg(long, value_name = "N", env = "LOOP_DE_LOOP_DEPTH_LIMIT")]
    pub depth_limit: Option<usize>,

    /// Maximum number of cycles to display (shows all by default)
    #[arg(long, env = "LOOP_DE_LOOP_MAX_CYCLES")]
    pub max_cycles: Option<usize>,
}

impl CommonArgs {
    /// Get paths, using current directory if none provided
    pub fn get_paths(&self) -> Vec<PathBuf> {
        if self.paths.is_empty() {
            vec![std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))]
        } else {
            self.paths.clone()
        }
    }
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, crate::error::LoopDeLoopError>;
}

/// Trait for configurations that can be created from CLI commands
/// This trait simplifies command-to-config conversions
pub trait FromCommand: Sized {
    /// The command variant that this config can be created from
    fn from_command(command: crate::cli::Commands) -> Result<Self, crate::error::LoopDeLoopError>;
}

/// Macro to implement `TryFrom<Commands>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Commands> for $config {
            type Error = $crate::error::LoopDeLoopError;

            fn try_from(command: $crate::cli::Commands) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}

/// Generates a builder whose fields are all required
///
/// Each field is listed with its setter name. The generated
/// [`ConfigBuilder::build`] fails with `Missing required field: <name>` for
/// any setter that was never called.
#[macro_export]
macro_rules! impl_builder {
    ($builder:ident => $config:ident { $($setter:ident => $field:ident : $ty:ty),* $(,)? }) => {
        #[derive(Default)]
        pub struct $builder {
            $($field: Option<$ty>,)*
        }

        impl $builder {
            pub fn new() -> Self {
                Self::default()
            }

            $(
                pub fn $setter(mut self, $field: $ty) -> Self {
                    self.$field = Some($field);
                    self
                }
            )*
        }

        impl $crate::common::ConfigBuilder for $builder {
            type Config = $config;

            fn build(self) -> Result<Self::Config, $crate::error::LoopDeLoopError> {
                Ok($config {
                    $(
                        $field: self.$field.ok_or_else(|| {
                            $crate::error::LoopDeLoopError::ConfigurationError {
                                message: concat!("Missing required field: ", stringify!($field))
                                    .to_string(),
                            }
                        })?,
                    )*
                })
            }
        }
    };
}

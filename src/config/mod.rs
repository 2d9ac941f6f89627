//! # Configuration Module
//!
//! This module provides configuration structures for all loop-de-loop
//! commands. Each command has its own config struct with a builder generated
//! by the `impl_builder!` macro.
//!
//! ## Command Configurations
//!
//! - **InspectConfig**: Configuration for the `inspect` command that lints
//!   files for circular imports
//! - **SpotlightConfig**: Configuration for the `spotlight` command that lists
//!   the cycles through one file
//! - **SpectacleConfig**: Configuration for the `spectacle` command that
//!   renders the import graph
//!
//! Settings shared by all three ([`LintSettings`]) come from command line
//! flags first, then `loop-de-loop.toml`, then built-in defaults.
//!
//! ## Example
//!
//! ```
//! use loop_de_loop::cli::OutputFormat;
//! use loop_de_loop::common::ConfigBuilder;
//! use loop_de_loop::config::{InspectConfig, LintSettings};
//!
//! let config = InspectConfig::builder()
//!     .with_settings(LintSettings::default())
//!     .with_format(OutputFormat::Json)
//!     .with_error_on_cycles(true)
//!     .with_max_cycles(None)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.settings.depth_limit, 50);
//! ```

mod common;
mod file;
mod inspect;
mod spectacle;
mod spotlight;

pub use common::LintSettings;
pub use file::FileConfig;
pub use inspect::{InspectConfig, InspectConfigBuilder};
pub use spectacle::{SpectacleConfig, SpectacleConfigBuilder};
pub use spotlight::{SpotlightConfig, SpotlightConfigBuilder};

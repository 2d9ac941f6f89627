//! Configuration constants for loop-de-loop
//!
//! This module contains the defaults used throughout the application. These
//! values can be overridden through command line flags, environment variables
//! or the configuration file.

use std::time::Duration;

/// Cycle search configuration
pub mod search {
    /// Longest cycle, in edges, that enumeration will look for
    pub const DEFAULT_DEPTH_LIMIT: usize = 50;
}

/// Source file discovery configuration
pub mod sources {
    /// Extensions treated as project source files, in resolution order
    pub const DEFAULT_EXTENSIONS: &[&str] = &["ts", "tsx", "d.ts", "js", "jsx", "mjs", "cjs"];

    /// Index files tried when a specifier points at a directory
    pub const INDEX_STEM: &str = "index";

    /// Directories never descended into
    pub const SKIPPED_DIRS: &[&str] = &["node_modules", ".git", "dist", "build", "target"];

    /// Directory whose contents are always third-party code
    pub const PACKAGE_DIR: &str = "node_modules";
}

/// Configuration file lookup
pub mod config_file {
    /// File name looked up in the current directory when `--config` is absent
    pub const DEFAULT_FILE_NAME: &str = "loop-de-loop.toml";
}

/// Progress bar configuration
pub mod progress {
    use super::*;

    /// Duration between progress bar updates
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

    /// Spinner frames for the roller coaster animation
    pub const SPINNER_FRAMES: &[&str] = &["🎢 ", "🎢⊙", "🎢◐", "🎢◓", "🎢◑", "🎢◒", "🎢○", "🎢●"];
}

/// Output formatting configuration
pub mod output {
    /// Default output format when not specified
    pub const DEFAULT_FORMAT: &str = "human";

    /// Prefix of every cycle diagnostic message
    pub const CYCLE_MESSAGE_PREFIX: &str = "circular import detected";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_constants() {
        assert_eq!(search::DEFAULT_DEPTH_LIMIT, 50);
    }

    #[test]
    fn test_progress_constants() {
        assert_eq!(progress::TICK_INTERVAL, Duration::from_millis(100));
        assert_eq!(progress::SPINNER_FRAMES.len(), 8);
    }

    #[test]
    fn test_output_constants() {
        assert_eq!(output::DEFAULT_FORMAT, "human");
        assert_eq!(output::CYCLE_MESSAGE_PREFIX, "circular import detected");
    }

    #[test]
    fn test_typescript_extensions_come_first() {
        assert_eq!(sources::DEFAULT_EXTENSIONS[0], "ts");
        assert!(sources::SKIPPED_DIRS.contains(&sources::PACKAGE_DIR));
    }
}

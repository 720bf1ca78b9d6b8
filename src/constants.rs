//! Configuration constants for gopkg-deps
//!
//! This module contains the constants used throughout the application.
//! Several of them can be extended or overridden through command-line flags
//! and environment variables.

use std::time::Duration;

/// Progress spinner configuration
pub mod progress {
    use super::*;

    /// Duration between spinner updates
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

    /// Spinner frames shown while packages are being resolved
    pub const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
}

/// Package classification
pub mod packages {
    /// Import path prefixes of hosted third-party code
    pub const THIRD_PARTY_ROOTS: &[&str] = &[
        "github.com",
        "bitbucket.org",
        "launchpad.net",
        "code.google.com",
    ];

    /// The cgo pseudo-package. It has no metadata and is never resolved.
    pub const CGO_PSEUDO_IMPORT: &str = "C";
}

/// Output formatting configuration
pub mod output {
    /// Default display mode when not specified
    pub const DEFAULT_DISPLAY: &str = "deps";

    /// Indent marker repeated once per level in the dependency tree
    pub const TREE_INDENT: &str = "| ";
}

/// Go toolchain configuration
pub mod go {
    /// Executable used to query package metadata
    pub const DEFAULT_GO_BINARY: &str = "go";
}

/// Process exit codes
pub mod exit {
    /// Exit code after printing help on request
    pub const HELP_REQUESTED: i32 = 1;
}

//! # Configuration Module
//!
//! Command-line arguments are turned into an [`AnalysisConfig`] through a
//! builder, which validates the values before any package is resolved.
//!
//! ## Example
//!
//! ```
//! use gopkg_deps::cli::DisplayMode;
//! use gopkg_deps::common::ConfigBuilder;
//! use gopkg_deps::config::AnalysisConfig;
//!
//! let config = AnalysisConfig::builder()
//!     .with_root("github.com/coreos/etcd")
//!     .with_display(DisplayMode::Layers)
//!     .with_short_names(true)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.root, "github.com/coreos/etcd");
//! ```

pub mod analysis;

pub use analysis::{AnalysisConfig, AnalysisConfigBuilder};

//! # gopkg-deps - Internal Dependency Layers of Go Packages
//!
//! gopkg-deps prints the internal dependencies of a Go package: every package
//! it imports, directly or transitively, that belongs to your project rather
//! than to the standard library or a third-party host.
//!
//! ## Main Components
//!
//! - **Resolver**: looks up package metadata, either through `go list -json`
//!   or from recorded `go list -json` output
//! - **PackageFilter**: decides which packages are internal
//! - **Graph**: builds the import graph with layers and depths, and renders
//!   it as a list, tree, layer groupings, DOT or JSON
//!
//! ## Usage
//!
//! ### Example: Layers of a Recorded Project
//!
//! ```
//! use gopkg_deps::graph::{GraphRenderer, ImportGraphBuilder};
//! use gopkg_deps::package_filter::PackageFilter;
//! use gopkg_deps::resolver::ManifestResolver;
//!
//! # fn main() -> miette::Result<()> {
//! // Output of `go list -json -deps ./cmd/server`, trimmed
//! let manifest = r#"
//! {"ImportPath": "example.com/shop/cmd/server",
//!  "Imports": ["example.com/shop/api", "example.com/shop/store", "net/http"]}
//! {"ImportPath": "example.com/shop/api", "Imports": ["example.com/shop/store"]}
//! {"ImportPath": "example.com/shop/store", "Imports": ["database/sql"]}
//! {"ImportPath": "net/http", "Standard": true}
//! {"ImportPath": "database/sql", "Standard": true}
//! "#;
//!
//! let resolver = ManifestResolver::from_json_stream(manifest)?;
//! let filter = PackageFilter::new("example.com/shop/cmd/server", false, false);
//! let graph = ImportGraphBuilder::new(resolver, filter).build(None)?;
//!
//! assert_eq!(graph.layer("example.com/shop/store"), Some(1));
//! assert_eq!(graph.depth("example.com/shop/cmd/server"), Some(2));
//!
//! let mut output = Vec::new();
//! GraphRenderer::new(false).render_depth(&graph, &mut output)?;
//! println!("{}", String::from_utf8_lossy(&output));
//! # Ok(())
//! # }
//! ```
//!
//! ### Example: Asking the Go Toolchain
//!
//! ```no_run
//! use gopkg_deps::graph::{GraphRenderer, ImportGraphBuilder};
//! use gopkg_deps::package_filter::PackageFilter;
//! use gopkg_deps::resolver::GoListResolver;
//!
//! # fn main() -> miette::Result<()> {
//! let filter = PackageFilter::new("github.com/coreos/etcd", false, false);
//! let graph = ImportGraphBuilder::new(GoListResolver::default(), filter).build(None)?;
//!
//! GraphRenderer::new(true).render_layers(&graph, &mut std::io::stdout())?;
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod utils;

// Public modules
pub mod cli;
pub mod common;
pub mod config;
pub mod error;
pub mod executors;
pub mod graph;
pub mod package_filter;
pub mod progress;
pub mod resolver;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;
    use clap::error::ErrorKind;
    use miette::WrapErr;

    use crate::cli::Cli;
    use crate::config::AnalysisConfig;
    use crate::executors::CommandExecutor;
    use crate::executors::deps::DepsExecutor;

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            let code = match err.kind() {
                ErrorKind::DisplayHelp
                | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                    constants::exit::HELP_REQUESTED
                }
                _ => err.exit_code(),
            };
            std::process::exit(code);
        }
    };

    let config = AnalysisConfig::try_from(cli).wrap_err("Invalid arguments")?;
    DepsExecutor::execute(config)
}

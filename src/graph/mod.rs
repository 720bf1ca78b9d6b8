//! # Import Graph Construction and Rendering
//!
//! This module builds the internal import graph of a Go package and renders
//! the views derived from it.
//!
//! ## Components
//!
//! ### Graph Building
//! - **ImportGraphBuilder**: walks imports depth-first from the root package,
//!   keeping only owned packages and recording each package's layer (shortest
//!   distance from the root), depth (longest chain of owned imports below it)
//!   and direct import count
//! - **ImportGraph**: the immutable result, backed by a petgraph `DiGraph`
//!
//! ### Graph Rendering
//! - **GraphRenderer**: flat list, indented tree, top-down layers, bottom-up
//!   depth and count groupings, plus DOT and JSON output
//!
//! ## Example
//!
//! ```
//! use gopkg_deps::cli::DisplayMode;
//! use gopkg_deps::graph::{GraphRenderer, ImportGraphBuilder};
//! use gopkg_deps::package_filter::PackageFilter;
//! use gopkg_deps::resolver::{ManifestResolver, PackageDescriptor};
//!
//! # fn main() -> miette::Result<()> {
//! let resolver = ManifestResolver::from_packages(vec![
//!     PackageDescriptor::new(
//!         "example.com/app",
//!         vec!["example.com/app/store".to_string(), "fmt".to_string()],
//!         false,
//!     ),
//!     PackageDescriptor::new("example.com/app/store", vec![], false),
//!     PackageDescriptor::new("fmt", vec![], true),
//! ]);
//!
//! let filter = PackageFilter::new("example.com/app", false, false);
//! let graph = ImportGraphBuilder::new(resolver, filter).build(None)?;
//! assert_eq!(graph.dependencies("example.com/app"), vec!["example.com/app/store"]);
//! assert_eq!(graph.depth("example.com/app"), Some(1));
//!
//! let mut output = Vec::new();
//! GraphRenderer::new(true).render(DisplayMode::Layers, &graph, &mut output)?;
//! let text = String::from_utf8(output).unwrap();
//! assert!(text.contains("1: store"));
//! # Ok(())
//! # }
//! ```

mod builder;
mod renderer;
mod types;

pub use builder::ImportGraphBuilder;
pub use renderer::GraphRenderer;
pub use types::{DependencyEdge, ImportGraph, PackageNode};

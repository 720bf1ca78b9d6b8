//! # Package Resolution
//!
//! gopkg-deps never parses Go sources itself. Everything it knows about a
//! package comes from a [`PackageResolver`], which maps an import path to a
//! [`PackageDescriptor`]:
//!
//! - **GoListResolver**: asks the Go toolchain (`go list -json`)
//! - **ManifestResolver**: answers from pre-recorded `go list -json` output
//!
//! ## Example
//!
//! ```
//! use gopkg_deps::resolver::{ManifestResolver, PackageDescriptor, PackageResolver};
//!
//! # fn main() -> miette::Result<()> {
//! let resolver = ManifestResolver::from_packages(vec![
//!     PackageDescriptor::new("example.com/app", vec!["fmt".to_string()], false),
//!     PackageDescriptor::new("fmt", vec![], true),
//! ]);
//!
//! let app = resolver.resolve("example.com/app")?;
//! assert_eq!(app.imports(), ["fmt"]);
//! assert!(resolver.resolve("fmt")?.is_stdlib());
//! # Ok(())
//! # }
//! ```

mod go_list;
mod manifest;

use serde::{Deserialize, Serialize};

pub use go_list::GoListResolver;
pub use manifest::ManifestResolver;

use crate::error::DepsError;

/// Metadata for a single Go package, as reported by `go list -json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PackageDescriptor {
    import_path: String,
    #[serde(default)]
    imports: Vec<String>,
    #[serde(default)]
    standard: bool,
    #[serde(default)]
    goroot: bool,
}

impl PackageDescriptor {
    pub fn new(import_path: impl Into<String>, imports: Vec<String>, is_stdlib: bool) -> Self {
        Self {
            import_path: import_path.into(),
            imports,
            standard: is_stdlib,
            goroot: is_stdlib,
        }
    }

    pub fn import_path(&self) -> &str {
        &self.import_path
    }

    /// Direct imports, in the order the toolchain reports them
    pub fn imports(&self) -> &[String] {
        &self.imports
    }

    /// Whether the package ships with the Go distribution
    pub fn is_stdlib(&self) -> bool {
        self.standard || self.goroot
    }
}

/// Source of package metadata.
///
/// Implementations must fail rather than guess: an import path that cannot
/// be resolved is reported as [`DepsError::PackageNotFound`].
pub trait PackageResolver {
    fn resolve(&self, import_path: &str) -> Result<PackageDescriptor, DepsError>;
}

impl<R: PackageResolver + ?Sized> PackageResolver for &R {
    fn resolve(&self, import_path: &str) -> Result<PackageDescriptor, DepsError> {
        (**self).resolve(import_path)
    }
}

impl<R: PackageResolver + ?Sized> PackageResolver for Box<R> {
    fn resolve(&self, import_path: &str) -> Result<PackageDescriptor, DepsError> {
        (**self).resolve(import_path)
    }
}

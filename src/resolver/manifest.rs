use std::collections::HashMap;
use std::path::Path;

use super::{PackageDescriptor, PackageResolver};
use crate::error::DepsError;

/// Resolves packages from recorded metadata instead of the Go toolchain.
///
/// The accepted input is what `go list -json -deps ./...` prints: a stream
/// of JSON objects, one per package, concatenated without separators.
#[derive(Debug, Clone, Default)]
pub struct ManifestResolver {
    packages: HashMap<String, PackageDescriptor>,
}

impl ManifestResolver {
    pub fn from_packages(packages: impl IntoIterator<Item = PackageDescriptor>) -> Self {
        Self {
            packages: packages
                .into_iter()
                .map(|p| (p.import_path().to_string(), p))
                .collect(),
        }
    }

    pub fn from_json_stream(input: &str) -> Result<Self, DepsError> {
        let packages = serde_json::Deserializer::from_str(input)
            .into_iter::<PackageDescriptor>()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|source| DepsError::ManifestParseError { source })?;
        Ok(Self::from_packages(packages))
    }

    pub fn from_file(path: &Path) -> Result<Self, DepsError> {
        let input =
            std::fs::read_to_string(path).map_err(|source| DepsError::ManifestReadError {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_json_stream(&input)
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

impl PackageResolver for ManifestResolver {
    fn resolve(&self, import_path: &str) -> Result<PackageDescriptor, DepsError> {
        self.packages
            .get(import_path)
            .cloned()
            .ok_or_else(|| DepsError::PackageNotFound {
                import_path: import_path.to_string(),
                message: "package is not listed in the manifest".to_string(),
            })
    }
}

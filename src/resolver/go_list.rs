use std::cell::RefCell;
use std::collections::HashMap;
use std::ffi::OsString;
use std::process::Command;

use super::{PackageDescriptor, PackageResolver};
use crate::constants::go::DEFAULT_GO_BINARY;
use crate::error::DepsError;

/// Resolves packages by shelling out to `go list -json`.
///
/// Lookups run in the current directory, so module-mode projects resolve
/// exactly as `go build` would see them. Each import path is queried at most
/// once per resolver.
#[derive(Debug)]
pub struct GoListResolver {
    go_binary: OsString,
    cache: RefCell<HashMap<String, PackageDescriptor>>,
}

impl Default for GoListResolver {
    fn default() -> Self {
        Self::new(DEFAULT_GO_BINARY)
    }
}

impl GoListResolver {
    pub fn new(go_binary: impl Into<OsString>) -> Self {
        Self {
            go_binary: go_binary.into(),
            cache: RefCell::new(HashMap::new()),
        }
    }

    fn query(&self, import_path: &str) -> Result<PackageDescriptor, DepsError> {
        let output = Command::new(&self.go_binary)
            .args(["list", "-json", "--", import_path])
            .output()
            .map_err(|source| DepsError::GoToolFailed {
                import_path: import_path.to_string(),
                source,
            })?;

        if !output.status.success() {
            return Err(DepsError::PackageNotFound {
                import_path: import_path.to_string(),
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        serde_json::from_slice(&output.stdout)
            .map_err(|source| DepsError::ManifestParseError { source })
    }
}

impl PackageResolver for GoListResolver {
    fn resolve(&self, import_path: &str) -> Result<PackageDescriptor, DepsError> {
        if let Some(descriptor) = self.cache.borrow().get(import_path) {
            return Ok(descriptor.clone());
        }

        let descriptor = self.query(import_path)?;
        self.cache
            .borrow_mut()
            .insert(import_path.to_string(), descriptor.clone());
        Ok(descriptor)
    }
}

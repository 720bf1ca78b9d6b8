//! Package filtering functionality

use crate::constants::packages::{CGO_PSEUDO_IMPORT, THIRD_PARTY_ROOTS};
use crate::resolver::PackageDescriptor;

/// Decides which resolved packages count as "owned" by the project under
/// analysis.
///
/// Third-party detection is a prefix check against known hosting domains,
/// not an ownership query: anything under an unrecognized domain is owned.
/// Packages under the root's own import path are never third-party.
#[derive(Debug, Clone, Default)]
pub struct PackageFilter {
    root: String,
    include_stdlib: bool,
    include_third_party: bool,
    extra_third_party_prefixes: Vec<String>,
}

impl PackageFilter {
    /// Create a new package filter
    ///
    /// # Arguments
    /// * `root` - Import path of the package being analyzed
    /// * `include_stdlib` - Keep standard library packages
    /// * `include_third_party` - Keep packages under known third-party hosts
    pub fn new(root: impl Into<String>, include_stdlib: bool, include_third_party: bool) -> Self {
        Self {
            root: root.into(),
            include_stdlib,
            include_third_party,
            extra_third_party_prefixes: Vec::new(),
        }
    }

    /// Treat packages under these prefixes as third-party, in addition to
    /// the built-in hosting domains
    pub fn with_third_party_prefixes(mut self, prefixes: Vec<String>) -> Self {
        self.extra_third_party_prefixes = prefixes;
        self
    }

    /// Replace the root, keeping every other setting
    pub fn with_root(mut self, root: impl Into<String>) -> Self {
        self.root = root.into();
        self
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    /// Whether an import must be dropped before it ever reaches the resolver
    pub fn is_pseudo_import(import_path: &str) -> bool {
        import_path == CGO_PSEUDO_IMPORT
    }

    pub fn is_excluded_stdlib(&self, package: &PackageDescriptor) -> bool {
        !self.include_stdlib && package.is_stdlib()
    }

    pub fn is_excluded_third_party(&self, package: &PackageDescriptor) -> bool {
        if self.include_third_party {
            return false;
        }
        let path = package.import_path();
        if path.starts_with(&self.root) {
            return false;
        }
        THIRD_PARTY_ROOTS.iter().any(|prefix| path.starts_with(prefix))
            || self
                .extra_third_party_prefixes
                .iter()
                .any(|prefix| path.starts_with(prefix.as_str()))
    }

    /// Check if a resolved package belongs in the graph
    pub fn is_owned(&self, package: &PackageDescriptor) -> bool {
        !self.is_excluded_stdlib(package) && !self.is_excluded_third_party(package)
    }
}

impl From<&crate::config::AnalysisConfig> for PackageFilter {
    fn from(config: &crate::config::AnalysisConfig) -> Self {
        Self::new(
            config.root.clone(),
            config.include_stdlib,
            config.include_third_party,
        )
        .with_third_party_prefixes(config.third_party_prefixes.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOT: &str = "github.com/acme/app";

    fn package(path: &str, stdlib: bool) -> PackageDescriptor {
        PackageDescriptor::new(path, vec![], stdlib)
    }

    #[test]
    fn test_stdlib_excluded_by_default() {
        let filter = PackageFilter::new(ROOT, false, false);
        assert!(!filter.is_owned(&package("net/http", true)));
    }

    #[test]
    fn test_stdlib_included_on_request() {
        let filter = PackageFilter::new(ROOT, true, false);
        assert!(filter.is_owned(&package("net/http", true)));
    }

    #[test]
    fn test_third_party_excluded_by_default() {
        let filter = PackageFilter::new(ROOT, false, false);
        assert!(!filter.is_owned(&package("github.com/pkg/errors", false)));
        assert!(!filter.is_owned(&package("bitbucket.org/team/lib", false)));
        assert!(!filter.is_owned(&package("launchpad.net/gocheck", false)));
        assert!(!filter.is_owned(&package("code.google.com/p/go.net", false)));
    }

    #[test]
    fn test_third_party_included_on_request() {
        let filter = PackageFilter::new(ROOT, false, true);
        assert!(filter.is_owned(&package("github.com/pkg/errors", false)));
    }

    #[test]
    fn test_packages_under_root_are_owned() {
        let filter = PackageFilter::new(ROOT, false, false);
        assert!(filter.is_owned(&package("github.com/acme/app/store", false)));
    }

    #[test]
    fn test_unknown_hosts_are_owned() {
        let filter = PackageFilter::new(ROOT, false, false);
        assert!(filter.is_owned(&package("golang.org/x/net/context", false)));
        assert!(filter.is_owned(&package("internal.corp/platform/log", false)));
    }

    #[test]
    fn test_extra_third_party_prefixes() {
        let filter = PackageFilter::new(ROOT, false, false)
            .with_third_party_prefixes(vec!["golang.org/x".to_string()]);
        assert!(!filter.is_owned(&package("golang.org/x/net/context", false)));
        assert!(filter.is_owned(&package("internal.corp/platform/log", false)));
    }

    #[test]
    fn test_with_root_moves_root_prefix_override() {
        let filter = PackageFilter::new(".", false, false).with_root(ROOT);
        assert_eq!(filter.root(), ROOT);
        assert!(filter.is_owned(&package("github.com/acme/app/store", false)));
    }

    #[test]
    fn test_cgo_pseudo_import() {
        assert!(PackageFilter::is_pseudo_import("C"));
        assert!(!PackageFilter::is_pseudo_import("crypto"));
    }
}

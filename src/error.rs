use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DepsError {
    #[error("Cannot find package '{import_path}'")]
    #[diagnostic(
        code(gopkg_deps::package_not_found),
        help(
            "Every imported package must be findable by the Go toolchain. Check your GOPATH, \
             module cache, or the manifest you passed with --manifest"
        )
    )]
    PackageNotFound {
        import_path: String,
        message: String,
    },

    #[error("Failed to run the Go tool for '{import_path}'")]
    #[diagnostic(
        code(gopkg_deps::go_tool_failed),
        help("Make sure `go` is installed and on PATH, or point --go at the binary")
    )]
    GoToolFailed {
        import_path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read manifest '{path}'")]
    #[diagnostic(
        code(gopkg_deps::manifest_read_error),
        help("Check if the file exists and you have read permissions")
    )]
    ManifestReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid package metadata")]
    #[diagnostic(
        code(gopkg_deps::manifest_parse_error),
        help("Package metadata must be a stream of `go list -json` objects")
    )]
    ManifestParseError {
        #[source]
        source: serde_json::Error,
    },

    #[error("JSON serialization error")]
    #[diagnostic(
        code(gopkg_deps::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("IO error")]
    #[diagnostic(
        code(gopkg_deps::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(gopkg_deps::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn test_package_not_found_display() {
        let error = DepsError::PackageNotFound {
            import_path: "example.com/app/missing".to_string(),
            message: "no required module provides package".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "Cannot find package 'example.com/app/missing'"
        );
    }

    #[test]
    fn test_manifest_read_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error = DepsError::ManifestReadError {
            path: PathBuf::from("/tmp/missing.json"),
            source: io_err,
        };

        assert_eq!(error.to_string(), "Failed to read manifest '/tmp/missing.json'");
    }

    #[test]
    fn test_configuration_error() {
        let error = DepsError::ConfigurationError {
            message: "Missing required field: root".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "Configuration error: Missing required field: root"
        );
    }

    #[test]
    fn test_error_codes() {
        let error = DepsError::GoToolFailed {
            import_path: "example.com/app".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "go: not found"),
        };

        use miette::Diagnostic;
        assert!(error.code().is_some());
        assert!(error.help().is_some());
    }

    #[test]
    fn test_error_conversion_from_io() {
        let io_err = io::Error::other("some io error");
        let deps_err: DepsError = io_err.into();

        match deps_err {
            DepsError::Io(_) => {}
            _ => panic!("Expected Io variant"),
        }
    }

    #[test]
    fn test_error_conversion_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{invalid json}").unwrap_err();
        let deps_err: DepsError = json_err.into();

        match deps_err {
            DepsError::Json(_) => {}
            _ => panic!("Expected Json variant"),
        }
    }
}

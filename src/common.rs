//! Common functionality shared across the CLI and configuration layers

use clap::Args;

/// Arguments controlling which packages count as internal
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Include Go built-in packages
    ///
    /// By default standard library packages are ignored.
    #[arg(long, env = "GOPKG_DEPS_STDLIB")]
    pub stdlib: bool,

    /// Include libraries
    ///
    /// By default anything under github.com, bitbucket.org, launchpad.net or
    /// code.google.com is ignored, because those are libraries and you only
    /// care about your app.
    #[arg(long, env = "GOPKG_DEPS_LIB")]
    pub lib: bool,

    /// Additional import path prefixes to treat as third-party libraries
    #[arg(
        long,
        value_name = "PREFIX",
        value_delimiter = ',',
        env = "GOPKG_DEPS_THIRD_PARTY_PREFIX"
    )]
    pub third_party_prefix: Vec<String>,
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, crate::error::DepsError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_args_default_excludes_everything_external() {
        let args = FilterArgs::default();
        assert!(!args.stdlib);
        assert!(!args.lib);
        assert!(args.third_party_prefix.is_empty());
    }
}

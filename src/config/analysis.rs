//! Analysis configuration

use std::path::PathBuf;

use crate::cli::{Cli, DisplayMode};
use crate::common::ConfigBuilder;
use crate::error::DepsError;

#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    pub root: String,
    pub display: DisplayMode,
    pub include_stdlib: bool,
    pub include_third_party: bool,
    pub third_party_prefixes: Vec<String>,
    pub short_names: bool,
    pub manifest: Option<PathBuf>,
    pub go_binary: String,
    pub output: Option<PathBuf>,
}

impl AnalysisConfig {
    pub fn builder() -> AnalysisConfigBuilder {
        AnalysisConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct AnalysisConfigBuilder {
    root: Option<String>,
    display: Option<DisplayMode>,
    include_stdlib: bool,
    include_third_party: bool,
    third_party_prefixes: Vec<String>,
    short_names: bool,
    manifest: Option<PathBuf>,
    go_binary: Option<String>,
    output: Option<PathBuf>,
}

impl AnalysisConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root(mut self, root: impl Into<String>) -> Self {
        self.root = Some(root.into());
        self
    }

    pub fn with_display(mut self, display: DisplayMode) -> Self {
        self.display = Some(display);
        self
    }

    pub fn with_include_stdlib(mut self, include_stdlib: bool) -> Self {
        self.include_stdlib = include_stdlib;
        self
    }

    pub fn with_include_third_party(mut self, include_third_party: bool) -> Self {
        self.include_third_party = include_third_party;
        self
    }

    pub fn with_third_party_prefixes(mut self, prefixes: Vec<String>) -> Self {
        self.third_party_prefixes = prefixes;
        self
    }

    pub fn with_short_names(mut self, short_names: bool) -> Self {
        self.short_names = short_names;
        self
    }

    pub fn with_manifest(mut self, manifest: Option<PathBuf>) -> Self {
        self.manifest = manifest;
        self
    }

    pub fn with_go_binary(mut self, go_binary: impl Into<String>) -> Self {
        self.go_binary = Some(go_binary.into());
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = output;
        self
    }
}

impl ConfigBuilder for AnalysisConfigBuilder {
    type Config = AnalysisConfig;

    fn build(self) -> Result<Self::Config, DepsError> {
        let root = self
            .root
            .ok_or_else(|| DepsError::ConfigurationError {
                message: "Missing required field: root".to_string(),
            })?
            .trim()
            .to_string();
        if root.is_empty() {
            return Err(DepsError::ConfigurationError {
                message: "The package import path must not be empty".to_string(),
            });
        }

        let third_party_prefixes = self
            .third_party_prefixes
            .into_iter()
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .collect();

        Ok(AnalysisConfig {
            root,
            display: self.display.unwrap_or(DisplayMode::Deps),
            include_stdlib: self.include_stdlib,
            include_third_party: self.include_third_party,
            third_party_prefixes,
            short_names: self.short_names,
            manifest: self.manifest,
            go_binary: self
                .go_binary
                .unwrap_or_else(|| crate::constants::go::DEFAULT_GO_BINARY.to_string()),
            output: self.output,
        })
    }
}

impl TryFrom<Cli> for AnalysisConfig {
    type Error = DepsError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        AnalysisConfig::builder()
            .with_root(cli.import_path)
            .with_display(cli.display)
            .with_include_stdlib(cli.filter.stdlib)
            .with_include_third_party(cli.filter.lib)
            .with_third_party_prefixes(cli.filter.third_party_prefix)
            .with_short_names(cli.short)
            .with_manifest(cli.manifest)
            .with_go_binary(cli.go)
            .with_output(cli.output)
            .build()
    }
}

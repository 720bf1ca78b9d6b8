use std::path::PathBuf;

use clap::Parser;

use crate::common::FilterArgs;

#[derive(Parser, Debug)]
#[command(
    name = "gopkg-deps",
    about = "Print the internal dependencies of a Go package",
    long_about = "gopkg-deps resolves every package a Go package imports, directly or \
                  transitively, and shows the ones that belong to your project. Standard \
                  library and third-party packages are left out unless asked for. The result can \
                  be shown as a flat list, a tree, top-down layers, bottom-up layers, or grouped \
                  by number of imports.",
    after_help = "<IMPORT_PATH> is a path exactly like you would use in an import statement. \
                  That package and all its dependencies must be findable by the Go toolchain.",
    version
)]
pub struct Cli {
    /// Import path of the package to analyze
    #[arg(value_name = "IMPORT_PATH")]
    pub import_path: String,

    /// What to display
    #[arg(
        short,
        long,
        value_enum,
        default_value = crate::constants::output::DEFAULT_DISPLAY,
        env = "GOPKG_DEPS_DISPLAY"
    )]
    pub display: DisplayMode,

    #[command(flatten)]
    pub filter: FilterArgs,

    /// Trim the analyzed package off the front of dependency names
    ///
    /// e.g. github.com/coreos/etcd/config -> config
    #[arg(long, env = "GOPKG_DEPS_SHORT")]
    pub short: bool,

    /// Read package metadata from recorded `go list -json` output instead of
    /// running the Go tool
    #[arg(long, value_name = "FILE", env = "GOPKG_DEPS_MANIFEST")]
    pub manifest: Option<PathBuf>,

    /// Go executable used to look up packages
    #[arg(
        long,
        value_name = "BIN",
        default_value = crate::constants::go::DEFAULT_GO_BINARY,
        env = "GOPKG_DEPS_GO"
    )]
    pub go: String,

    /// Output file (stdout if not specified)
    #[arg(short, long, env = "GOPKG_DEPS_OUTPUT")]
    pub output: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum DisplayMode {
    /// Direct dependencies only
    Deps,
    /// Dependencies of the dependencies, recursively, as a tree
    Deep,
    /// Top-down dependency layers
    Layers,
    /// Bottom-up dependency layers
    Depth,
    /// Packages organised by how many internal imports they have
    Count,
    /// Graphviz DOT
    Dot,
    /// JSON
    Json,
}

impl DisplayMode {
    /// Text modes are meant for people and start with a title line
    pub fn is_text(self) -> bool {
        !matches!(self, DisplayMode::Dot | DisplayMode::Json)
    }
}

//! Deps command executor

use std::fs::File;
use std::io::{self, BufWriter, Write};

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::config::AnalysisConfig;
use crate::executors::CommandExecutor;
use crate::graph::{GraphRenderer, ImportGraphBuilder};
use crate::package_filter::PackageFilter;
use crate::progress::ProgressReporter;
use crate::resolver::{GoListResolver, ManifestResolver, PackageResolver};

pub struct DepsExecutor;

impl DepsExecutor {
    fn resolver(config: &AnalysisConfig) -> Result<Box<dyn PackageResolver>> {
        match config.manifest.as_ref() {
            Some(path) => {
                let manifest = ManifestResolver::from_file(path).wrap_err_with(|| {
                    format!("Failed to load package manifest '{}'", path.display())
                })?;
                Ok(Box::new(manifest))
            }
            None => Ok(Box::new(GoListResolver::new(&config.go_binary))),
        }
    }
}

impl CommandExecutor for DepsExecutor {
    type Config = AnalysisConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let resolver = Self::resolver(&config)?;
        let builder = ImportGraphBuilder::new(resolver, PackageFilter::from(&config));

        // Create progress reporter if we're in an interactive terminal
        let mut progress = ProgressReporter::for_terminal();
        if let Some(p) = progress.as_mut() {
            p.start_resolution(&config.root);
        }

        // Every import is resolved before anything is printed, so a failed
        // lookup leaves stdout untouched.
        let graph = match builder.build(progress.as_ref()) {
            Ok(graph) => graph,
            Err(err) => {
                if let Some(p) = progress.as_mut() {
                    p.abandon();
                }
                return Err(err).wrap_err_with(|| {
                    format!("Failed to resolve the dependencies of '{}'", config.root)
                });
            }
        };

        if let Some(p) = progress.as_mut() {
            p.finish_resolution(graph.len(), graph.visits());
        }

        let mut output_writer: Box<dyn Write> = if let Some(output_path) = config.output.as_ref()
        {
            Box::new(BufWriter::new(
                File::create(output_path)
                    .into_diagnostic()
                    .wrap_err_with(|| {
                        format!("Failed to create output file '{}'", output_path.display())
                    })?,
            ))
        } else {
            Box::new(io::stdout())
        };

        // Files never get escape codes, whatever stdout is attached to
        let styled = config.output.is_none() && console::colors_enabled();
        GraphRenderer::new(config.short_names)
            .with_styling(styled)
            .render(config.display, &graph, output_writer.as_mut())
            .wrap_err("Failed to render dependency report")?;
        output_writer
            .flush()
            .into_diagnostic()
            .wrap_err("Failed to write dependency report")?;

        if let Some(output_path) = config.output {
            eprintln!(
                "{} Report written to {}",
                style("✓").green(),
                style(output_path.display()).bold()
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::cli::DisplayMode;
    use crate::common::ConfigBuilder;

    const MANIFEST: &str = r#"
{"ImportPath": "example.com/app", "Imports": ["example.com/app/a", "fmt"]}
{"ImportPath": "example.com/app/a", "Imports": []}
{"ImportPath": "fmt", "Standard": true}
"#;

    #[test]
    fn test_execute_writes_report_file() {
        let temp = TempDir::new().unwrap();
        let manifest = temp.path().join("packages.json");
        let report = temp.path().join("report.txt");
        fs::write(&manifest, MANIFEST).unwrap();

        let config = AnalysisConfig::builder()
            .with_root("example.com/app")
            .with_display(DisplayMode::Deps)
            .with_manifest(Some(manifest))
            .with_output(Some(report.clone()))
            .build()
            .unwrap();

        DepsExecutor::execute(config).unwrap();

        let text = fs::read_to_string(report).unwrap();
        assert!(text.starts_with("Dependencies of example.com/app\n"));
        assert!(!text.contains('\u{1b}'));
        assert!(text.ends_with("  example.com/app/a\n"));
    }

    #[test]
    fn test_execute_fails_without_creating_report() {
        let temp = TempDir::new().unwrap();
        let manifest = temp.path().join("packages.json");
        let report = temp.path().join("report.txt");
        fs::write(&manifest, r#"{"ImportPath": "example.com/app", "Imports": ["gone"]}"#)
            .unwrap();

        let config = AnalysisConfig::builder()
            .with_root("example.com/app")
            .with_manifest(Some(manifest))
            .with_output(Some(report.clone()))
            .build()
            .unwrap();

        assert!(DepsExecutor::execute(config).is_err());
        assert!(!report.exists());
    }

    #[test]
    fn test_missing_manifest() {
        let config = AnalysisConfig::builder()
            .with_root("example.com/app")
            .with_manifest(Some("/nonexistent/packages.json".into()))
            .build()
            .unwrap();

        assert!(DepsExecutor::execute(config).is_err());
    }
}

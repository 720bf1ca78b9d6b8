use std::borrow::Cow;
use std::collections::BTreeMap;
use std::io::Write;

use console::style;
use miette::Result;
use serde::Serialize;

use super::types::ImportGraph;
use crate::cli::DisplayMode;
use crate::constants::output::TREE_INDENT;
use crate::error::DepsError;
use crate::utils::string::shorten;

// Helper macro for write operations that converts IO errors
macro_rules! writeln_out {
    ($dst:expr) => {
        writeln!($dst).map_err(DepsError::from)
    };
    ($dst:expr, $($arg:tt)*) => {
        writeln!($dst, $($arg)*).map_err(DepsError::from)
    };
}

#[derive(Serialize)]
struct GraphReport<'a> {
    root: &'a str,
    max_layer: usize,
    max_dependency_count: usize,
    packages: Vec<PackageReport<'a>>,
}

#[derive(Serialize)]
struct PackageReport<'a> {
    import_path: &'a str,
    layer: usize,
    depth: usize,
    dependency_count: usize,
    dependencies: Vec<&'a str>,
}

/// Renders the projections of an [`ImportGraph`].
///
/// Every projection only reads the graph, so one renderer can produce
/// several views of the same build.
pub struct GraphRenderer {
    short_names: bool,
    styled: bool,
}

impl GraphRenderer {
    /// Create a renderer that writes plain text
    pub fn new(short_names: bool) -> Self {
        Self {
            short_names,
            styled: false,
        }
    }

    /// Emit terminal styling in the title. Only enable this when the output
    /// is a terminal, never for files.
    pub fn with_styling(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }

    /// Display name of a package, with the root trimmed off when short names
    /// are enabled
    pub fn name<'a>(&self, graph: &ImportGraph, import_path: &'a str) -> Cow<'a, str> {
        if self.short_names {
            shorten(import_path, graph.root())
        } else {
            import_path.into()
        }
    }

    /// Render `mode`, preceded by the title line for the text modes
    pub fn render(
        &self,
        mode: DisplayMode,
        graph: &ImportGraph,
        output: &mut dyn Write,
    ) -> Result<()> {
        if mode.is_text() {
            self.render_title(graph, output)?;
        }
        match mode {
            DisplayMode::Deps => self.render_deps(graph, output),
            DisplayMode::Deep => self.render_deep(graph, output),
            DisplayMode::Layers => self.render_layers(graph, output),
            DisplayMode::Depth => self.render_depth(graph, output),
            DisplayMode::Count => self.render_count(graph, output),
            DisplayMode::Dot => self.render_dot(graph, output),
            DisplayMode::Json => self.render_json(graph, output),
        }
    }

    pub fn render_title(&self, graph: &ImportGraph, output: &mut dyn Write) -> Result<()> {
        writeln_out!(
            output,
            "Dependencies of {}",
            style(graph.root()).bold().force_styling(self.styled)
        )?;
        Ok(())
    }

    /// The root's direct owned dependencies, one per line
    pub fn render_deps(&self, graph: &ImportGraph, output: &mut dyn Write) -> Result<()> {
        let deps = graph.dependencies(graph.root());
        if deps.is_empty() {
            writeln_out!(output, "No internal dependencies")?;
        }
        for dep in deps {
            writeln_out!(output, "  {}", self.name(graph, dep))?;
        }
        Ok(())
    }

    /// The whole graph as an indented tree, in pre-order
    pub fn render_deep(&self, graph: &ImportGraph, output: &mut dyn Write) -> Result<()> {
        writeln_out!(output, "Dependency tree")?;
        let mut ancestors = Vec::new();
        self.render_subtree(graph, graph.root(), &mut ancestors, output)
    }

    fn render_subtree<'a>(
        &self,
        graph: &'a ImportGraph,
        import_path: &'a str,
        ancestors: &mut Vec<&'a str>,
        output: &mut dyn Write,
    ) -> Result<()> {
        let indent = TREE_INDENT.repeat(ancestors.len());
        writeln_out!(output, "{}{}", indent, self.name(graph, import_path))?;

        // A package on its own ancestor path would recurse forever.
        if ancestors.contains(&import_path) {
            return Ok(());
        }

        ancestors.push(import_path);
        for dep in graph.dependencies(import_path) {
            self.render_subtree(graph, dep, ancestors, output)?;
        }
        ancestors.pop();
        Ok(())
    }

    /// Packages grouped by the shallowest layer they were found at
    pub fn render_layers(&self, graph: &ImportGraph, output: &mut dyn Write) -> Result<()> {
        writeln_out!(output, "Top-down dependency layers")?;
        writeln_out!(output, "Number after package name is number of imports")?;

        let deepest = graph
            .packages()
            .map(|node| node.layer())
            .max()
            .unwrap_or(0)
            .max(graph.max_layer());
        let mut layers: Vec<Vec<&str>> = vec![Vec::new(); deepest + 1];
        for node in graph.packages() {
            layers[node.layer()].push(node.import_path());
        }

        for (layer, packages) in layers.iter().enumerate() {
            writeln_out!(
                output,
                "{}: {}",
                layer,
                self.annotated(graph, packages).join(", ")
            )?;
        }
        Ok(())
    }

    /// Packages grouped by the length of their longest dependency chain,
    /// deepest first
    pub fn render_depth(&self, graph: &ImportGraph, output: &mut dyn Write) -> Result<()> {
        writeln_out!(output, "Bottom-up dependency layers")?;
        writeln_out!(output, "Number after package name is number of imports")?;

        let mut by_depth: BTreeMap<usize, Vec<&str>> = BTreeMap::new();
        for node in graph.packages() {
            by_depth
                .entry(node.depth())
                .or_default()
                .push(node.import_path());
        }

        for (depth, mut packages) in by_depth.into_iter().rev() {
            packages.sort_unstable();
            writeln_out!(
                output,
                "{} {}",
                depth,
                self.annotated(graph, &packages).join(", ")
            )?;
        }
        Ok(())
    }

    /// Packages grouped by how many owned packages they import, largest
    /// first
    pub fn render_count(&self, graph: &ImportGraph, output: &mut dyn Write) -> Result<()> {
        writeln_out!(output, "Packages by descending number of internal imports")?;

        let mut by_count: BTreeMap<usize, Vec<&str>> = BTreeMap::new();
        for node in graph.packages() {
            by_count
                .entry(node.dependency_count())
                .or_default()
                .push(node.import_path());
        }

        for (count, mut packages) in by_count.into_iter().rev() {
            packages.sort_unstable();
            writeln_out!(output, "{} {}", count, packages.join(", "))?;
        }
        Ok(())
    }

    /// Graphviz DOT output, one rank per layer
    pub fn render_dot(&self, graph: &ImportGraph, output: &mut dyn Write) -> Result<()> {
        writeln_out!(output, "digraph dependencies {{")?;
        writeln_out!(output, "    rankdir=TB;")?;
        writeln_out!(output, "    node [shape=box, style=rounded];")?;
        writeln_out!(output)?;

        let mut by_layer: BTreeMap<usize, Vec<&str>> = BTreeMap::new();
        for node in graph.packages() {
            writeln_out!(
                output,
                r#"    "{}" [label="{}"];"#,
                escape(node.import_path()),
                escape(&self.name(graph, node.import_path()))
            )?;
            by_layer
                .entry(node.layer())
                .or_default()
                .push(node.import_path());
        }

        writeln_out!(output)?;
        for packages in by_layer.values() {
            let members: Vec<String> = packages
                .iter()
                .map(|p| format!("\"{}\";", escape(p)))
                .collect();
            writeln_out!(output, "    {{ rank=same; {} }}", members.join(" "))?;
        }

        writeln_out!(output)?;
        for node in graph.packages() {
            for dep in graph.dependencies(node.import_path()) {
                writeln_out!(
                    output,
                    r#"    "{}" -> "{}";"#,
                    escape(node.import_path()),
                    escape(dep)
                )?;
            }
        }

        writeln_out!(output, "}}")?;
        Ok(())
    }

    /// Machine-readable dump of every retained package
    pub fn render_json(&self, graph: &ImportGraph, output: &mut dyn Write) -> Result<()> {
        let mut packages: Vec<PackageReport<'_>> = graph
            .packages()
            .map(|node| PackageReport {
                import_path: node.import_path(),
                layer: node.layer(),
                depth: node.depth(),
                dependency_count: node.dependency_count(),
                dependencies: graph.dependencies(node.import_path()),
            })
            .collect();
        packages.sort_by(|a, b| a.import_path.cmp(b.import_path));

        let report = GraphReport {
            root: graph.root(),
            max_layer: graph.max_layer(),
            max_dependency_count: graph.max_dependency_count(),
            packages,
        };

        serde_json::to_writer_pretty(&mut *output, &report).map_err(DepsError::from)?;
        writeln_out!(output)?;
        Ok(())
    }

    /// Display names with their import counts, sorted as rendered
    fn annotated(&self, graph: &ImportGraph, packages: &[&str]) -> Vec<String> {
        let mut annotated: Vec<String> = packages
            .iter()
            .map(|&path| {
                let name = self.name(graph, path);
                match graph.dependency_count(path).unwrap_or(0) {
                    0 => name.into_owned(),
                    count => format!("{name} {count}"),
                }
            })
            .collect();
        annotated.sort();
        annotated
    }
}

fn escape(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}

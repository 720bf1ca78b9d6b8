//! Tests for the text projections of an import graph

use std::collections::BTreeSet;

use gopkg_deps::cli::DisplayMode;
use gopkg_deps::graph::{GraphRenderer, ImportGraph, ImportGraphBuilder};
use gopkg_deps::package_filter::PackageFilter;
use gopkg_deps::resolver::ManifestResolver;
use pretty_assertions::assert_eq;

const ROOT: &str = "example.com/shop";

// model is first reached at layer 3 through api and store, then lowered to
// layer 2 by the direct import from api
const MANIFEST: &str = r#"
{"ImportPath": "example.com/shop", "Imports": ["example.com/shop/api", "example.com/shop/store", "fmt"]}
{"ImportPath": "example.com/shop/api", "Imports": ["example.com/shop/store", "example.com/shop/model"]}
{"ImportPath": "example.com/shop/store", "Imports": ["example.com/shop/model", "database/sql"]}
{"ImportPath": "example.com/shop/model", "Imports": ["time"]}
{"ImportPath": "fmt", "Standard": true}
{"ImportPath": "database/sql", "Standard": true}
{"ImportPath": "time", "Goroot": true}
"#;

fn shop_graph() -> ImportGraph {
    let resolver = ManifestResolver::from_json_stream(MANIFEST).unwrap();
    ImportGraphBuilder::new(resolver, PackageFilter::new(ROOT, false, false))
        .build(None)
        .unwrap()
}

fn render(renderer: &GraphRenderer, mode: DisplayMode, graph: &ImportGraph) -> String {
    let mut output = Vec::new();
    renderer.render(mode, graph, &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

fn body(text: &str, header_lines: usize) -> Vec<&str> {
    text.lines().skip(1 + header_lines).collect()
}

#[test]
fn test_deps_lists_direct_dependencies() {
    let graph = shop_graph();
    let text = render(&GraphRenderer::new(false), DisplayMode::Deps, &graph);

    assert_eq!(
        body(&text, 0),
        vec!["  example.com/shop/api", "  example.com/shop/store"]
    );
}

#[test]
fn test_deep_first_level_matches_deps() {
    let graph = shop_graph();
    let renderer = GraphRenderer::new(false);
    let deep = render(&renderer, DisplayMode::Deep, &graph);
    let deps = render(&renderer, DisplayMode::Deps, &graph);

    let first_level: Vec<&str> = body(&deep, 1)
        .into_iter()
        .filter(|line| line.starts_with("| ") && !line.starts_with("| | "))
        .map(|line| line.trim_start_matches("| "))
        .collect();
    let direct: Vec<&str> = body(&deps, 0).into_iter().map(str::trim).collect();

    assert_eq!(first_level, direct);
    assert_eq!(body(&deep, 1)[0], ROOT);
}

#[test]
fn test_deep_tree_repeats_shared_subtrees() {
    let graph = shop_graph();
    let text = render(&GraphRenderer::new(true), DisplayMode::Deep, &graph);

    assert_eq!(
        body(&text, 1),
        vec![
            ROOT,
            "| api",
            "| | store",
            "| | | model",
            "| | model",
            "| store",
            "| | model",
        ]
    );
}

#[test]
fn test_layers_partition_packages() {
    let graph = shop_graph();
    let text = render(&GraphRenderer::new(false), DisplayMode::Layers, &graph);

    let mut seen = BTreeSet::new();
    for line in body(&text, 2) {
        let (_, names) = line.split_once(": ").unwrap();
        for entry in names.split(", ").filter(|e| !e.is_empty()) {
            let name = entry.split(' ').next().unwrap();
            assert!(seen.insert(name.to_string()), "{name} listed twice");
        }
    }

    let all: BTreeSet<String> = graph
        .packages()
        .map(|n| n.import_path().to_string())
        .collect();
    assert_eq!(seen, all);
}

#[test]
fn test_layers_output() {
    let graph = shop_graph();
    let text = render(&GraphRenderer::new(true), DisplayMode::Layers, &graph);

    assert_eq!(
        text.lines().skip(1).collect::<Vec<_>>(),
        vec![
            "Top-down dependency layers",
            "Number after package name is number of imports",
            "0: example.com/shop 2",
            "1: api 2, store 1",
            "2: model",
            "3: ",
        ]
    );
}

#[test]
fn test_depth_descending() {
    let graph = shop_graph();
    let text = render(&GraphRenderer::new(true), DisplayMode::Depth, &graph);

    assert_eq!(
        body(&text, 2),
        vec!["3 example.com/shop 2", "2 api 2", "1 store 1", "0 model"]
    );
}

#[test]
fn test_count_uses_full_names() {
    let graph = shop_graph();
    let text = render(&GraphRenderer::new(true), DisplayMode::Count, &graph);

    assert_eq!(
        body(&text, 1),
        vec![
            "2 example.com/shop, example.com/shop/api",
            "1 example.com/shop/store",
            "0 example.com/shop/model",
        ]
    );
}

#[test]
fn test_short_names_off_is_identity() {
    let graph = shop_graph();
    let renderer = GraphRenderer::new(false);

    assert_eq!(renderer.name(&graph, "example.com/shop/api"), "example.com/shop/api");
    assert_eq!(
        GraphRenderer::new(true).name(&graph, "example.com/shop/api"),
        "api"
    );
    assert_eq!(GraphRenderer::new(true).name(&graph, ROOT), ROOT);
}

#[test]
fn test_machine_modes_have_no_title() {
    let graph = shop_graph();
    let renderer = GraphRenderer::new(false);

    let json = render(&renderer, DisplayMode::Json, &graph);
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["root"], ROOT);
    assert_eq!(value["packages"].as_array().unwrap().len(), 4);

    let dot = render(&renderer, DisplayMode::Dot, &graph);
    assert!(dot.starts_with("digraph dependencies {"));
    assert!(dot.contains(r#""example.com/shop/api" -> "example.com/shop/store";"#));
}

#[test]
fn test_deps_without_internal_dependencies() {
    let manifest = r#"
{"ImportPath": "app", "Imports": ["fmt", "github.com/spf13/cobra"]}
{"ImportPath": "fmt", "Standard": true}
{"ImportPath": "github.com/spf13/cobra", "Imports": ["app/unused"]}
"#;
    let resolver = ManifestResolver::from_json_stream(manifest).unwrap();
    let graph = ImportGraphBuilder::new(resolver, PackageFilter::new("app", false, false))
        .build(None)
        .unwrap();

    let text = render(&GraphRenderer::new(false), DisplayMode::Deps, &graph);
    assert_eq!(text, "Dependencies of app\nNo internal dependencies\n");
}

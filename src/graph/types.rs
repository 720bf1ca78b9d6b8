//! Core graph types
//!
//! This module contains the data structures produced by the import graph
//! builder and consumed by the renderers.

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

/// A package retained in the import graph, with its traversal results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageNode {
    import_path: String,
    layer: usize,
    depth: usize,
    dependency_count: usize,
}

impl PackageNode {
    pub(crate) fn new(import_path: impl Into<String>, layer: usize) -> Self {
        Self {
            import_path: import_path.into(),
            layer,
            depth: 0,
            dependency_count: 0,
        }
    }

    pub fn import_path(&self) -> &str {
        &self.import_path
    }

    /// Shortest distance from the root at which the package was reached
    pub fn layer(&self) -> usize {
        self.layer
    }

    /// Length of the longest chain of owned dependencies below the package
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Number of direct owned dependencies
    pub fn dependency_count(&self) -> usize {
        self.dependency_count
    }

    pub(crate) fn set_layer(&mut self, layer: usize) {
        self.layer = layer;
    }

    pub(crate) fn set_depth(&mut self, depth: usize) {
        self.depth = depth;
    }

    pub(crate) fn set_dependency_count(&mut self, count: usize) {
        self.dependency_count = count;
    }
}

/// An owned import from one package to another
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DependencyEdge {
    /// Position of the import in the importer's resolved import list
    pub position: usize,
}

/// The internal import graph of a root package.
///
/// Built once by [`ImportGraphBuilder`](super::ImportGraphBuilder) and
/// read-only afterwards.
#[derive(Debug, Clone)]
pub struct ImportGraph {
    root: String,
    graph: DiGraph<PackageNode, DependencyEdge>,
    indices: HashMap<String, NodeIndex>,
    max_layer: usize,
    max_dependency_count: usize,
    visits: usize,
}

impl ImportGraph {
    pub(crate) fn new(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            graph: DiGraph::new(),
            indices: HashMap::new(),
            max_layer: 0,
            max_dependency_count: 0,
            visits: 0,
        }
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn graph(&self) -> &DiGraph<PackageNode, DependencyEdge> {
        &self.graph
    }

    pub fn node(&self, import_path: &str) -> Option<&PackageNode> {
        self.indices.get(import_path).map(|&idx| &self.graph[idx])
    }

    pub fn contains(&self, import_path: &str) -> bool {
        self.indices.contains_key(import_path)
    }

    /// Owned dependencies of a package, in resolver order.
    ///
    /// Empty for packages that are not in the graph.
    pub fn dependencies(&self, import_path: &str) -> Vec<&str> {
        let Some(&idx) = self.indices.get(import_path) else {
            return Vec::new();
        };
        let mut edges: Vec<_> = self.graph.edges(idx).collect();
        edges.sort_by_key(|edge| edge.weight().position);
        edges
            .into_iter()
            .map(|edge| self.graph[edge.target()].import_path())
            .collect()
    }

    pub fn layer(&self, import_path: &str) -> Option<usize> {
        self.node(import_path).map(PackageNode::layer)
    }

    pub fn depth(&self, import_path: &str) -> Option<usize> {
        self.node(import_path).map(PackageNode::depth)
    }

    pub fn dependency_count(&self, import_path: &str) -> Option<usize> {
        self.node(import_path).map(PackageNode::dependency_count)
    }

    /// All retained packages, in discovery order
    pub fn packages(&self) -> impl Iterator<Item = &PackageNode> {
        self.graph.node_weights()
    }

    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Deepest layer reached during traversal, revisits included
    pub fn max_layer(&self) -> usize {
        self.max_layer
    }

    pub fn max_dependency_count(&self) -> usize {
        self.max_dependency_count
    }

    /// Number of package visits made while building, revisits included
    pub fn visits(&self) -> usize {
        self.visits
    }

    // Mutation is limited to the builder.

    pub(crate) fn index_of(&self, import_path: &str) -> Option<NodeIndex> {
        self.indices.get(import_path).copied()
    }

    pub(crate) fn node_mut(&mut self, idx: NodeIndex) -> &mut PackageNode {
        &mut self.graph[idx]
    }

    pub(crate) fn insert(&mut self, node: PackageNode) -> NodeIndex {
        let path = node.import_path().to_string();
        let idx = self.graph.add_node(node);
        self.indices.insert(path, idx);
        idx
    }

    /// Replace the outgoing edges of `from` with `targets`, in order
    pub(crate) fn set_dependencies(&mut self, from: NodeIndex, targets: &[NodeIndex]) {
        let mut stale: Vec<_> = self.graph.edges(from).map(|edge| edge.id()).collect();
        // Removal swaps the last edge into the freed slot, so go back to front.
        stale.sort();
        for id in stale.into_iter().rev() {
            self.graph.remove_edge(id);
        }
        for (position, &to) in targets.iter().enumerate() {
            self.graph.add_edge(from, to, DependencyEdge { position });
        }
    }

    pub(crate) fn record_visit(&mut self, layer: usize) {
        self.visits += 1;
        self.max_layer = self.max_layer.max(layer);
    }

    pub(crate) fn record_dependency_count(&mut self, count: usize) {
        self.max_dependency_count = self.max_dependency_count.max(count);
    }
}

use miette::Result;
use petgraph::graph::NodeIndex;

use super::types::{ImportGraph, PackageNode};
use crate::package_filter::PackageFilter;
use crate::progress::ProgressReporter;
use crate::resolver::{PackageDescriptor, PackageResolver};

/// Builder for the internal import graph of a root package
///
/// Walks import edges depth-first from the root, asking the resolver for
/// each package and keeping only the packages the filter considers owned.
/// Layers and depths are computed during the same walk.
pub struct ImportGraphBuilder<R> {
    resolver: R,
    filter: PackageFilter,
}

/// Outcome of visiting one package
struct Visited {
    index: NodeIndex,
    depth: usize,
}

struct Traversal<'a, R> {
    resolver: &'a R,
    filter: &'a PackageFilter,
    progress: Option<&'a ProgressReporter>,
    graph: ImportGraph,
}

impl<R: PackageResolver> ImportGraphBuilder<R> {
    /// Create a new import graph builder
    ///
    /// The filter's root is the package the graph is built for.
    pub fn new(resolver: R, filter: PackageFilter) -> Self {
        Self { resolver, filter }
    }

    /// Resolve the root package and everything it transitively owns.
    ///
    /// Fails on the first import path the resolver cannot resolve; no
    /// partial graph is ever returned.
    pub fn build(&self, progress: Option<&ProgressReporter>) -> Result<ImportGraph> {
        let root = self.resolver.resolve(self.filter.root())?;

        // The argument may be relative (`.`, `./cmd/x`); the graph and the
        // root-prefix check use the import path it resolves to.
        let filter = self.filter.clone().with_root(root.import_path());
        let mut traversal = Traversal {
            resolver: &self.resolver,
            filter: &filter,
            progress,
            graph: ImportGraph::new(root.import_path()),
        };
        traversal.visit(&root, 0)?;

        Ok(traversal.graph)
    }
}

impl<R: PackageResolver> Traversal<'_, R> {
    fn visit(&mut self, package: &PackageDescriptor, layer: usize) -> Result<Visited> {
        let path = package.import_path();
        self.graph.record_visit(layer);
        if let Some(p) = self.progress {
            p.visiting(path, self.graph.visits());
        }

        // A package is only expanded again when reached by a strictly
        // shallower path. This is also what stops import cycles.
        let index = match self.graph.index_of(path) {
            Some(index) => {
                let node = &self.graph.graph()[index];
                if node.layer() <= layer {
                    return Ok(Visited {
                        index,
                        depth: node.depth(),
                    });
                }
                self.graph.node_mut(index).set_layer(layer);
                index
            }
            None => self.graph.insert(PackageNode::new(path, layer)),
        };

        let owned = self.owned_imports(package)?;
        self.graph.node_mut(index).set_dependency_count(owned.len());
        self.graph.record_dependency_count(owned.len());

        let mut targets = Vec::with_capacity(owned.len());
        let mut deepest_child = None;
        for dependency in &owned {
            let child = self.visit(dependency, layer + 1)?;
            targets.push(child.index);
            deepest_child = deepest_child.max(Some(child.depth));
        }

        let depth = deepest_child.map_or(0, |d| d + 1);
        self.graph.set_dependencies(index, &targets);
        self.graph.node_mut(index).set_depth(depth);

        Ok(Visited { index, depth })
    }

    /// Resolve the direct imports of a package and keep the owned ones, in
    /// import order
    fn owned_imports(&self, package: &PackageDescriptor) -> Result<Vec<PackageDescriptor>> {
        let mut owned = Vec::new();
        for import in package.imports() {
            if PackageFilter::is_pseudo_import(import) {
                continue;
            }
            let resolved = self.resolver.resolve(import)?;
            if self.filter.is_owned(&resolved) {
                owned.push(resolved);
            }
        }
        Ok(owned)
    }
}

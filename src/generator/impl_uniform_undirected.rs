use crate::generator::{check_edge_budget, EdgeGenerator, UniformUndirected};
use crate::{DependencyGraph, NetworkError, NodeId};
use fxhash::FxBuildHasher;
use rand::{Rng, RngCore};
use std::collections::HashSet;

impl EdgeGenerator for UniformUndirected {
    fn generate(
        &self,
        num_nodes: usize,
        num_edges: usize,
        rng: &mut dyn RngCore,
    ) -> Result<DependencyGraph, NetworkError> {
        let representable = num_nodes.saturating_mul(num_nodes.saturating_add(1)) / 2;
        check_edge_budget(num_edges, representable)?;
        let mut dependency_lists: Vec<Vec<NodeId>> = vec![Vec::new(); num_nodes];
        let mut seen: HashSet<(usize, usize), FxBuildHasher> =
            HashSet::with_hasher(FxBuildHasher::default());
        while seen.len() < num_edges {
            let first = rng.random_range(0..num_nodes);
            let second = rng.random_range(0..num_nodes);
            // Deduplicate as an unordered pair.
            let edge = if first <= second {
                (first, second)
            } else {
                (second, first)
            };
            if seen.insert(edge) {
                dependency_lists[first].push(NodeId::from(second));
                if first != second {
                    dependency_lists[second].push(NodeId::from(first));
                }
            }
        }
        log::debug!(
            "Sampled {} distinct undirected edges among {} nodes.",
            num_edges,
            num_nodes
        );
        DependencyGraph::from_dependency_lists(dependency_lists)
    }
}

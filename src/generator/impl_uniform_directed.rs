use crate::generator::{check_edge_budget, EdgeGenerator, UniformDirected};
use crate::{DependencyGraph, NetworkError, NodeId};
use fxhash::FxBuildHasher;
use rand::{Rng, RngCore};
use std::collections::HashSet;

impl EdgeGenerator for UniformDirected {
    fn generate(
        &self,
        num_nodes: usize,
        num_edges: usize,
        rng: &mut dyn RngCore,
    ) -> Result<DependencyGraph, NetworkError> {
        check_edge_budget(num_edges, num_nodes.saturating_mul(num_nodes))?;
        let mut dependency_lists: Vec<Vec<NodeId>> = vec![Vec::new(); num_nodes];
        let mut seen: HashSet<(usize, usize), FxBuildHasher> =
            HashSet::with_hasher(FxBuildHasher::default());
        while seen.len() < num_edges {
            let source = rng.random_range(0..num_nodes);
            let target = rng.random_range(0..num_nodes);
            // Only the target needs to know about the edge.
            if seen.insert((source, target)) {
                dependency_lists[target].push(NodeId::from(source));
            }
        }
        log::debug!(
            "Sampled {} distinct directed edges among {} nodes.",
            num_edges,
            num_nodes
        );
        DependencyGraph::from_dependency_lists(dependency_lists)
    }
}

#[cfg(test)]
mod tests {
    use crate::generator::{EdgeGenerator, UniformDirected};
    use crate::{NetworkError, NodeId};
    use pretty_assertions::assert_eq;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_zero_edges_makes_every_node_self_dependent() {
        let mut rng = SmallRng::seed_from_u64(42);
        let graph = UniformDirected.generate(5, 0, &mut rng).unwrap();
        for node in graph.nodes() {
            assert_eq!(&[node], graph.dependencies(node));
        }
    }

    #[test]
    fn test_exhaustive_budget() {
        let mut rng = SmallRng::seed_from_u64(42);
        // With the full budget, every node depends on every node.
        let graph = UniformDirected.generate(3, 9, &mut rng).unwrap();
        assert_eq!(9, graph.num_dependencies());
        for node in graph.nodes() {
            let sources: HashSet<NodeId> = graph.dependencies(node).iter().cloned().collect();
            assert_eq!(3, sources.len());
        }
    }

    #[test]
    fn test_edge_budget_exceeded() {
        let mut rng = SmallRng::seed_from_u64(42);
        let result = UniformDirected.generate(3, 10, &mut rng);
        assert!(matches!(
            result,
            Err(NetworkError::EdgeBudgetExceeded {
                requested: 10,
                representable: 9
            })
        ));
    }

    #[test]
    fn test_edges_are_distinct() {
        let mut rng = SmallRng::seed_from_u64(42);
        let graph = UniformDirected.generate(10, 30, &mut rng).unwrap();
        let mut edges: HashSet<(usize, usize)> = HashSet::new();
        for target in graph.nodes() {
            for source in graph.dependencies(target) {
                assert!(edges.insert((usize::from(*source), usize::from(target))));
            }
        }
        // All 30 sampled edges are present; cleanup may add at most one
        // self-loop per otherwise isolated node.
        assert!(edges.len() >= 30);
        assert!(edges.len() <= 30 + 10);
        for node in graph.nodes() {
            assert!(graph.in_degree(node) >= 1);
        }
    }

    #[test]
    fn test_same_seed_same_graph() {
        let mut first_rng = SmallRng::seed_from_u64(7);
        let mut second_rng = SmallRng::seed_from_u64(7);
        let first = UniformDirected.generate(16, 40, &mut first_rng).unwrap();
        let second = UniformDirected.generate(16, 40, &mut second_rng).unwrap();
        assert_eq!(first, second);
    }
}

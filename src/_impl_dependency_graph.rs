use crate::{DependencyGraph, NetworkError, NodeId, NodeIdIterator};
use std::ops::Index;

/// Methods for safely constructing new instances of `DependencyGraph`s.
impl DependencyGraph {
    /// Create a new `DependencyGraph` from one ordered dependency list per node
    /// (the number of nodes is the number of lists).
    ///
    /// Any node with an empty dependency list is rewritten to depend on itself alone,
    /// so after construction every node has in-degree at least one. The order of each
    /// list is preserved; it fixes the bit positions of the node's truth keys.
    ///
    /// Returns `Err` if any referenced node is out of range.
    pub fn from_dependency_lists(
        lists: Vec<Vec<NodeId>>,
    ) -> Result<DependencyGraph, NetworkError> {
        let num_nodes = lists.len();
        for (node, list) in lists.iter().enumerate() {
            for dependency in list {
                if dependency.0 >= num_nodes {
                    return Err(NetworkError::InvalidParameter(format!(
                        "Node {} depends on {}, which is not a node of a graph with {} nodes.",
                        node, dependency, num_nodes
                    )));
                }
            }
        }
        let dependencies = lists
            .into_iter()
            .enumerate()
            .map(|(node, list)| if list.is_empty() { vec![NodeId(node)] } else { list })
            .collect();
        Ok(DependencyGraph { dependencies })
    }
}

/// Some basic utility methods for inspecting the `DependencyGraph`.
impl DependencyGraph {
    /// The number of nodes in this `DependencyGraph`.
    pub fn num_nodes(&self) -> usize {
        self.dependencies.len()
    }

    /// The ordered dependency set of the given node.
    pub fn dependencies(&self, node: NodeId) -> &[NodeId] {
        &self.dependencies[node.0]
    }

    /// The in-degree of the given node, i.e. the arity of its rule.
    pub fn in_degree(&self, node: NodeId) -> usize {
        self.dependencies[node.0].len()
    }

    /// The total number of dependencies across all nodes. This is the edge count as
    /// seen by the rules, so cleanup self-loops are included.
    pub fn num_dependencies(&self) -> usize {
        self.dependencies.iter().map(|list| list.len()).sum()
    }

    /// The largest in-degree in this graph.
    pub fn max_in_degree(&self) -> usize {
        self.dependencies
            .iter()
            .map(|list| list.len())
            .max()
            .unwrap_or(0)
    }

    /// Return an iterator over all node ids of this graph.
    pub fn nodes(&self) -> NodeIdIterator {
        (0..self.dependencies.len()).map(NodeId)
    }
}

/// Allow indexing `DependencyGraph` using `NodeId` objects.
impl Index<NodeId> for DependencyGraph {
    type Output = [NodeId];

    fn index(&self, index: NodeId) -> &Self::Output {
        self.dependencies(index)
    }
}

#[cfg(test)]
mod tests {
    use crate::{DependencyGraph, NodeId};
    use pretty_assertions::assert_eq;

    /// **(test)** A small hand-built graph: `0 <- {1, 2}`, `1 <- {1}`, `2 <- empty`.
    fn build_test_graph() -> DependencyGraph {
        DependencyGraph::from_dependency_lists(vec![
            vec![NodeId(1), NodeId(2)],
            vec![NodeId(1)],
            vec![],
        ])
        .unwrap()
    }

    #[test]
    fn test_isolated_nodes_become_self_dependent() {
        let graph = build_test_graph();
        assert_eq!(&[NodeId(2)], graph.dependencies(NodeId(2)));
        for node in graph.nodes() {
            assert!(graph.in_degree(node) >= 1);
        }
    }

    #[test]
    fn test_dependency_order_is_preserved() {
        let graph = build_test_graph();
        assert_eq!(&[NodeId(1), NodeId(2)], graph.dependencies(NodeId(0)));
        assert_eq!(&[NodeId(1), NodeId(2)], &graph[NodeId(0)]);
    }

    #[test]
    fn test_degree_statistics() {
        let graph = build_test_graph();
        assert_eq!(3, graph.num_nodes());
        assert_eq!(4, graph.num_dependencies());
        assert_eq!(2, graph.max_in_degree());
    }

    #[test]
    fn test_out_of_range_dependency() {
        let result = DependencyGraph::from_dependency_lists(vec![vec![NodeId(1)]]);
        assert!(result.is_err());
    }
}

use crate::DependencyGraph;
use std::fmt::{Display, Error, Formatter};

/// Print one `source -> target` line per dependency, in node-index order of the
/// targets (and list order of the sources).
impl Display for DependencyGraph {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        for target in self.nodes() {
            for source in self.dependencies(target) {
                writeln!(f, "{} -> {}", usize::from(*source), usize::from(target))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{DependencyGraph, NodeId};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_dependency_graph_to_string() {
        let graph = DependencyGraph::from_dependency_lists(vec![
            vec![NodeId::from(1)],
            vec![NodeId::from(0), NodeId::from(1)],
            vec![],
        ])
        .unwrap();
        let expected = "1 -> 0\n0 -> 1\n1 -> 1\n2 -> 2\n";
        assert_eq!(expected, graph.to_string().as_str());
    }
}

use crate::generator::EdgeGenerator;
use crate::util::check_probability;
use crate::{
    DependencyGraph, NetworkError, NodeId, RandomBooleanNetwork, RuleTable, StateVector,
};
use rand::Rng;

/// Methods for safely constructing new instances of `RandomBooleanNetwork`s.
impl RandomBooleanNetwork {
    /// Create a new `RandomBooleanNetwork` with `num_nodes` nodes and `num_edges`
    /// randomly generated distinct edges.
    ///
    /// The topology is produced by the given `EdgeGenerator`, one rule table is
    /// synthesized per node with `rule_activation_probability`, and the initial state
    /// is sampled with `initial_state_probability`. All randomness is drawn from the
    /// provided generator, so the same seed reproduces the same network.
    ///
    /// Returns `Err` when `num_nodes` is zero, a probability lies outside of `[0, 1]`,
    /// or the generator cannot produce `num_edges` distinct edges.
    pub fn new<G: EdgeGenerator + ?Sized>(
        num_nodes: usize,
        num_edges: usize,
        edge_generator: &G,
        rule_activation_probability: f64,
        initial_state_probability: f64,
        rng: &mut impl Rng,
    ) -> Result<RandomBooleanNetwork, NetworkError> {
        if num_nodes == 0 {
            return Err(NetworkError::InvalidParameter(
                "A network must have at least one node.".to_string(),
            ));
        }
        check_probability("Rule activation", rule_activation_probability)?;
        check_probability("Initial state", initial_state_probability)?;
        let graph = edge_generator.generate(num_nodes, num_edges, rng)?;
        let rules = Self::synthesize_rules(&graph, rule_activation_probability, rng)?;
        let mut network = RandomBooleanNetwork {
            state: StateVector::empty(graph.num_nodes()),
            graph,
            rules,
        };
        network.initialize_state(initial_state_probability, rng)?;
        log::debug!(
            "Constructed network: {} nodes, {} dependencies, max in-degree {}.",
            network.num_nodes(),
            network.num_dependencies(),
            network.max_in_degree()
        );
        Ok(network)
    }

    /// Assemble a `RandomBooleanNetwork` from an explicit graph and explicit rule
    /// tables (one per node, in node order). The initial state is all-off; use
    /// `initialize_state` to randomize it.
    ///
    /// Returns `Err` when the number of rules differs from the number of nodes, or
    /// when a rule's arity does not match its node's in-degree.
    pub fn from_parts(
        graph: DependencyGraph,
        rules: Vec<RuleTable>,
    ) -> Result<RandomBooleanNetwork, NetworkError> {
        if rules.len() != graph.num_nodes() {
            return Err(NetworkError::InvalidParameter(format!(
                "Got {} rule tables for {} nodes.",
                rules.len(),
                graph.num_nodes()
            )));
        }
        for node in graph.nodes() {
            let arity = rules[node.to_index()].arity();
            if arity != graph.in_degree(node) {
                return Err(NetworkError::InvalidParameter(format!(
                    "Rule table of {} has arity {}, but the node has in-degree {}.",
                    node,
                    arity,
                    graph.in_degree(node)
                )));
            }
        }
        Ok(RandomBooleanNetwork {
            state: StateVector::empty(graph.num_nodes()),
            graph,
            rules,
        })
    }

    /// **(internal)** Synthesize one random rule table per node, sized to the node's
    /// in-degree. The graph is already cleaned, so every arity is at least one.
    fn synthesize_rules(
        graph: &DependencyGraph,
        activation_probability: f64,
        rng: &mut impl Rng,
    ) -> Result<Vec<RuleTable>, NetworkError> {
        let mut rules = Vec::with_capacity(graph.num_nodes());
        for node in graph.nodes() {
            rules.push(RuleTable::random(
                graph.in_degree(node),
                activation_probability,
                rng,
            )?);
        }
        Ok(rules)
    }
}

/// Some utility methods for accessing the structure of a `RandomBooleanNetwork`.
impl RandomBooleanNetwork {
    /// The number of nodes in this network.
    pub fn num_nodes(&self) -> usize {
        self.graph.num_nodes()
    }

    /// Obtain a reference to the underlying `DependencyGraph` of the network.
    pub fn graph(&self) -> &DependencyGraph {
        &self.graph
    }

    /// The rule table of the given node.
    pub fn rule(&self, node: NodeId) -> &RuleTable {
        &self.rules[node.0]
    }

    /// The current state vector of the network.
    pub fn state(&self) -> &StateVector {
        &self.state
    }

    /// Diagnostic: the total number of dependencies across all nodes.
    pub fn num_dependencies(&self) -> usize {
        self.graph.num_dependencies()
    }

    /// Diagnostic: the largest in-degree in the network.
    pub fn max_in_degree(&self) -> usize {
        self.graph.max_in_degree()
    }
}

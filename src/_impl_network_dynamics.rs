use crate::util::check_probability;
use crate::{NetworkError, RandomBooleanNetwork, StateVector, TruthKey};
use rand::Rng;

/// The state-machine operations of a `RandomBooleanNetwork`.
///
/// All three operations replace the state vector wholesale. In particular,
/// `transition_state` stages every new value against the frozen pre-step vector and
/// only then publishes the staged vector, so no node ever observes a neighbour's
/// already-updated value within the same step.
impl RandomBooleanNetwork {
    /// Re-sample the state vector: every node is independently on with the given
    /// probability.
    ///
    /// Can be used to restart a run without rebuilding topology or rules.
    pub fn initialize_state(
        &mut self,
        probability: f64,
        rng: &mut impl Rng,
    ) -> Result<(), NetworkError> {
        check_probability("Initial state", probability)?;
        self.state = StateVector::random(self.num_nodes(), probability, rng);
        Ok(())
    }

    /// Advance the network by one synchronous step.
    ///
    /// Every node, in node-index order, reads the pre-step states of its dependency
    /// set (in list order), encodes them into a `TruthKey` and looks up its rule
    /// output. The staged outputs are then published together as the new state
    /// vector. The step is a pure function of the current state, the topology and
    /// the rules.
    pub fn transition_state(&mut self) -> Result<(), NetworkError> {
        let mut staged = Vec::with_capacity(self.num_nodes());
        for node in self.graph.nodes() {
            let dependency_states = self
                .graph
                .dependencies(node)
                .iter()
                .map(|dependency| self.state.get(dependency.to_index()));
            let key = TruthKey::encode(dependency_states);
            staged.push(self.rules[node.to_index()].output(key)?);
        }
        self.state = StateVector::from(staged);
        Ok(())
    }

    /// Flip every node of the state vector independently with the given probability.
    ///
    /// Models an external perturbation of the network, e.g. to probe the stability of
    /// an attractor. The transition rules are not consulted.
    pub fn introduce_disturbance(
        &mut self,
        probability: f64,
        rng: &mut impl Rng,
    ) -> Result<(), NetworkError> {
        check_probability("Disturbance", probability)?;
        let mut disturbed = self.state.clone();
        for node in 0..self.num_nodes() {
            if rng.random_bool(probability) {
                disturbed.flip(node);
            }
        }
        self.state = disturbed;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::generator::UniformDirected;
    use crate::{DependencyGraph, NodeId, RandomBooleanNetwork, RuleTable, StateVector};
    use pretty_assertions::assert_eq;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    /// **(test)** A two-node network where each node copies the other's previous
    /// state: `0 <- {1}` and `1 <- {0}`, both rules being the identity of their
    /// single input.
    fn build_swap_network() -> RandomBooleanNetwork {
        let graph = DependencyGraph::from_dependency_lists(vec![
            vec![NodeId::from(1)],
            vec![NodeId::from(0)],
        ])
        .unwrap();
        let copy_input = RuleTable::from_outputs(vec![false, true]).unwrap();
        RandomBooleanNetwork::from_parts(graph, vec![copy_input.clone(), copy_input]).unwrap()
    }

    #[test]
    fn test_update_is_synchronous() {
        // Both nodes must read the frozen pre-step state, which swaps the two
        // values. An interleaved in-place update would instead copy the first
        // node's new value into the second and converge.
        let mut network = build_swap_network();
        network.state = StateVector::from(vec![true, false]);
        network.transition_state().unwrap();
        assert_eq!(vec![false, true], network.state().values());
        network.transition_state().unwrap();
        assert_eq!(vec![true, false], network.state().values());
    }

    #[test]
    fn test_transition_is_deterministic() {
        let mut rng = SmallRng::seed_from_u64(42);
        let network =
            RandomBooleanNetwork::new(12, 40, &UniformDirected, 0.5, 0.5, &mut rng).unwrap();
        let mut first = network.clone();
        let mut second = network;
        for _ in 0..50 {
            first.transition_state().unwrap();
            second.transition_state().unwrap();
            assert_eq!(first.state(), second.state());
        }
    }

    #[test]
    fn test_initialize_state_extremes() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut network =
            RandomBooleanNetwork::new(8, 10, &UniformDirected, 0.5, 0.5, &mut rng).unwrap();
        network.initialize_state(0.0, &mut rng).unwrap();
        assert_eq!(vec![false; 8], network.state().values());
        network.initialize_state(1.0, &mut rng).unwrap();
        assert_eq!(vec![true; 8], network.state().values());
        assert!(network.initialize_state(1.5, &mut rng).is_err());
    }

    #[test]
    fn test_disturbance_extremes() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut network =
            RandomBooleanNetwork::new(8, 10, &UniformDirected, 0.5, 0.5, &mut rng).unwrap();
        let before = network.state().clone();
        // Zero probability leaves the state untouched.
        network.introduce_disturbance(0.0, &mut rng).unwrap();
        assert_eq!(&before, network.state());
        // Probability one flips every node.
        network.introduce_disturbance(1.0, &mut rng).unwrap();
        let flipped: Vec<bool> = before.values().iter().map(|v| !v).collect();
        assert_eq!(flipped, network.state().values());
        assert!(network.introduce_disturbance(-0.5, &mut rng).is_err());
    }
}

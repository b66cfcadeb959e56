use std::iter::Map;
use std::ops::Range;

pub mod generator;
pub mod run;

/// **(internal)** Utility methods for `DependencyGraph`.
mod _impl_dependency_graph;
/// **(internal)** `DependencyGraph` to edge-list string.
mod _impl_display_dependency_graph;
/// **(internal)** Utility methods for `DisturbanceSchedule`.
mod _impl_disturbance_schedule;
/// **(internal)** Construction and accessors for `RandomBooleanNetwork`.
mod _impl_network;
/// **(internal)** State-machine operations of `RandomBooleanNetwork`.
mod _impl_network_dynamics;
/// **(internal)** Utility methods for `NodeId`.
mod _impl_node_id;
/// **(internal)** Utility methods for `RuleTable`.
mod _impl_rule_table;
/// **(internal)** Utility methods for `StateVector`.
mod _impl_state_vector;
/// **(internal)** Utility methods for `TruthKey`, including input enumeration.
mod _impl_truth_key;
/// **(internal)** Small shared validation helpers.
mod util;

/// A type-safe index of a node inside a `RandomBooleanNetwork` (or a `DependencyGraph`).
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct NodeId(usize);

/// A canonical representation of one assignment of boolean values to an ordered
/// dependency set.
///
/// The key is a fixed-width bit pattern: the *first* dependency in the set maps to the
/// *most significant* bit. Consequently, the numeric order of the keys of one rule table
/// is exactly the lexicographic order of the corresponding input sequences. Two distinct
/// input sequences of the same length never collide.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct TruthKey(u64);

/// The dependency structure of a `RandomBooleanNetwork`: for every node, an ordered
/// sequence of the nodes whose states feed its rule (its in-edges).
///
/// The graph guarantees that every node has at least one dependency: nodes that would
/// end up isolated are rewritten to depend on themselves during construction. The order
/// of each dependency list is fixed for the lifetime of the graph and determines the bit
/// positions of the node's truth keys.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DependencyGraph {
    dependencies: Vec<Vec<NodeId>>,
}

/// A total Boolean function from every possible `TruthKey` of a fixed arity to one
/// output bit.
///
/// The table covers exactly all `2^arity` keys and is stored densely (the key *is* the
/// index). It is built once, at network construction, and never regenerated.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RuleTable {
    arity: usize,
    outputs: Vec<bool>,
}

/// An ordered sequence of `N` boolean node states, indexed by `NodeId`.
///
/// State vectors are always replaced wholesale: a transition stages all new values
/// against the frozen previous vector and only then publishes them together. This is
/// what makes the update synchronous.
#[derive(Clone, PartialEq)]
pub struct StateVector {
    len: usize,
    values: bitvector::BitVector,
}

/// A random Boolean network: a `DependencyGraph`, one `RuleTable` per node (in node
/// order) and the current `StateVector`.
///
/// Topology and rules are fixed for the lifetime of the network; only the state vector
/// changes, and it is reassigned as a whole by every `initialize_state`,
/// `transition_state` and `introduce_disturbance` call.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RandomBooleanNetwork {
    graph: DependencyGraph,
    rules: Vec<RuleTable>,
    state: StateVector,
}

/// Evenly spaced disturbance times for a run of a fixed length.
///
/// For `D` disturbances over `T` transitions, the period is `floor(T / (D + 1))` and
/// event `i` (1-indexed) falls on step `i * period`, so all events lie strictly inside
/// the run.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DisturbanceSchedule {
    period: usize,
    times: Vec<usize>,
}

/// An error produced by this library.
///
/// None of these are transient, so retrying the failed operation cannot succeed. A failed
/// construction yields no usable network, and a network whose transition failed is left
/// in an undefined state.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    /// A construction or update parameter is outside of its valid range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    /// More distinct edges were requested than the chosen edge semantics can represent.
    #[error("edge budget exceeded: requested {requested} distinct edges, but only {representable} exist")]
    EdgeBudgetExceeded {
        /// The requested number of distinct edges.
        requested: usize,
        /// The number of distinct edges representable for the given node count.
        representable: usize,
    },
    /// A computed `TruthKey` is outside the domain of its `RuleTable`. This indicates
    /// a construction bug and is not recoverable.
    #[error("internal consistency violation: {0}")]
    InternalConsistency(String),
}

/// An iterator over all `NodeId`s of a `DependencyGraph`.
pub type NodeIdIterator = Map<Range<usize>, fn(usize) -> NodeId>;

/// An iterator over the full key domain of a `RuleTable`.
pub type TruthKeyIterator = Map<Range<u64>, fn(u64) -> TruthKey>;

/// An iterator over all boolean input sequences of a fixed arity, in lexicographic
/// order. Produced by `TruthKey::enumerate_inputs`.
pub struct InputPatternIterator {
    arity: usize,
    next: u64,
    end: u64,
}

//! Random topology generation for `RandomBooleanNetwork`s.
//!
//! An `EdgeGenerator` produces a `DependencyGraph` with exactly the requested number
//! of distinct edges. Two sampling strategies are provided, because "edge" can
//! reasonably mean two different things:
//!
//!  - `UniformDirected` treats an edge as an ordered `(source, target)` pair; only
//!    the target's dependency list grows.
//!  - `UniformUndirected` treats an edge as an unordered pair; both endpoints'
//!    dependency lists grow (a self-loop grows its single endpoint once).
//!
//! The two strategies yield different in-degree distributions, so the choice is part
//! of the experiment setup. `UniformDirected` is the default choice for classic
//! random Boolean networks.

use crate::{DependencyGraph, NetworkError};
use rand::RngCore;

mod impl_uniform_directed;
mod impl_uniform_undirected;

/// A strategy producing a random `DependencyGraph` with an exact number of distinct
/// edges among a fixed set of nodes.
///
/// Implementations draw all randomness from the provided generator, so the same seed
/// reproduces the same topology. A request for more distinct edges than the strategy
/// can represent fails with `EdgeBudgetExceeded` up front instead of sampling
/// forever.
pub trait EdgeGenerator {
    /// Generate a graph with `num_nodes` nodes and exactly `num_edges` distinct
    /// edges.
    ///
    /// Nodes left without dependencies become self-dependent (see
    /// `DependencyGraph::from_dependency_lists`); such cleanup self-loops do not
    /// count against `num_edges`.
    fn generate(
        &self,
        num_nodes: usize,
        num_edges: usize,
        rng: &mut dyn RngCore,
    ) -> Result<DependencyGraph, NetworkError>;
}

/// Uniform sampling of *directed* edges: every candidate is an ordered
/// `(source, target)` pair drawn uniformly, deduplicated as an ordered pair, and only
/// the target's dependency list is extended. Self-loops are permitted and count as
/// one edge. At most `N^2` distinct edges exist.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct UniformDirected;

/// Uniform sampling of *undirected* edges: every candidate is an unordered pair drawn
/// uniformly, deduplicated as an unordered pair, and both endpoints' dependency lists
/// are extended (a self-loop extends its single endpoint once). At most
/// `N * (N + 1) / 2` distinct edges exist.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct UniformUndirected;

/// **(internal)** Fail with `EdgeBudgetExceeded` when more distinct edges are
/// requested than the strategy can represent.
pub(crate) fn check_edge_budget(
    requested: usize,
    representable: usize,
) -> Result<(), NetworkError> {
    if requested > representable {
        Err(NetworkError::EdgeBudgetExceeded {
            requested,
            representable,
        })
    } else {
        Ok(())
    }
}

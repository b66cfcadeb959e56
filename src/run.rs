//! Driving complete simulation runs.
//!
//! A run is a fixed number of synchronous transitions with an optional set of evenly
//! spaced disturbances (see `DisturbanceSchedule`). Every state vector the run passes
//! through, including the initial one, is handed to a `StateSink`. Sinks are plain
//! consumers of the state sequence: the typical implementation renders one image
//! column per step, but rendering itself lives outside of this crate.
//!
//! ```rust
//! use biodivine_lib_rbn::generator::UniformDirected;
//! use biodivine_lib_rbn::run::RunConfig;
//! use biodivine_lib_rbn::{RandomBooleanNetwork, StateVector};
//! use rand::rngs::SmallRng;
//! use rand::SeedableRng;
//!
//! let mut rng = SmallRng::seed_from_u64(1);
//! let mut network =
//!     RandomBooleanNetwork::new(8, 16, &UniformDirected, 0.5, 0.5, &mut rng).unwrap();
//!
//! let config = RunConfig {
//!     num_transitions: 10,
//!     num_disturbances: 2,
//!     disturbance_probability: 0.1,
//! };
//! let mut columns: Vec<Vec<bool>> = Vec::new();
//! network
//!     .run(&config, &mut rng, &mut |_step: usize, state: &StateVector| {
//!         columns.push(state.values());
//!     })
//!     .unwrap();
//! assert_eq!(11, columns.len());
//! ```

use crate::util::check_probability;
use crate::{DisturbanceSchedule, NetworkError, RandomBooleanNetwork, StateVector};
use rand::Rng;

/// The parameters of one simulation run.
#[derive(Clone, Debug, PartialEq)]
pub struct RunConfig {
    /// The number of synchronous transitions to perform.
    pub num_transitions: usize,
    /// The number of evenly spaced disturbance events (zero disables disturbances).
    pub num_disturbances: usize,
    /// The per-node flip probability applied at each disturbance event.
    pub disturbance_probability: f64,
}

/// A consumer of the sequence of state vectors produced by a run.
pub trait StateSink {
    /// Record the state vector observed at the given step. Step zero is the initial
    /// state; step `t > 0` is the state after the `t`-th transition.
    fn record(&mut self, step: usize, state: &StateVector);
}

/// Any closure over `(step, state)` is a valid sink.
impl<F: FnMut(usize, &StateVector)> StateSink for F {
    fn record(&mut self, step: usize, state: &StateVector) {
        self(step, state)
    }
}

impl RandomBooleanNetwork {
    /// Run the network for `config.num_transitions` synchronous steps, applying
    /// `config.num_disturbances` evenly spaced disturbances along the way.
    ///
    /// The sink first receives the initial state (step zero) and then one state per
    /// transition, `num_transitions + 1` vectors in total. When a step is in the
    /// disturbance schedule, the disturbance is applied before that step's
    /// transition.
    ///
    /// Returns `Err` when the disturbance probability is outside of `[0, 1]`, when
    /// the schedule cannot fit the run, or when a transition fails.
    pub fn run(
        &mut self,
        config: &RunConfig,
        rng: &mut impl Rng,
        sink: &mut impl StateSink,
    ) -> Result<(), NetworkError> {
        check_probability("Disturbance", config.disturbance_probability)?;
        let schedule =
            DisturbanceSchedule::new(config.num_disturbances, config.num_transitions)?;
        if !schedule.is_empty() {
            log::debug!("Disturbance times: {:?}.", schedule.times());
        }
        sink.record(0, &self.state);
        for step in 0..config.num_transitions {
            if schedule.is_scheduled(step) {
                log::debug!("Introducing disturbance at step {}.", step);
                self.introduce_disturbance(config.disturbance_probability, rng)?;
            }
            self.transition_state()?;
            sink.record(step + 1, &self.state);
        }
        Ok(())
    }
}

use crate::{DisturbanceSchedule, NetworkError};

/// Methods for safely constructing new instances of `DisturbanceSchedule`s.
impl DisturbanceSchedule {
    /// Compute the schedule of `num_disturbances` evenly spaced disturbance events
    /// for a run of `num_transitions` steps.
    ///
    /// The period between events is `floor(num_transitions / (num_disturbances + 1))`
    /// and event `i` (1-indexed) falls on step `i * period`, so every event lies
    /// strictly inside the run. Zero disturbances produce an empty schedule.
    ///
    /// Returns `Err` when the run is too short to space the requested events, i.e.
    /// when the period would be zero.
    pub fn new(
        num_disturbances: usize,
        num_transitions: usize,
    ) -> Result<DisturbanceSchedule, NetworkError> {
        if num_disturbances == 0 {
            return Ok(DisturbanceSchedule {
                period: 0,
                times: Vec::new(),
            });
        }
        let period = num_transitions / (num_disturbances + 1);
        if period == 0 {
            return Err(NetworkError::InvalidParameter(format!(
                "Cannot schedule {} disturbances in a run of {} transitions.",
                num_disturbances, num_transitions
            )));
        }
        let times = (1..=num_disturbances).map(|i| i * period).collect();
        Ok(DisturbanceSchedule { period, times })
    }
}

/// Some basic utility methods for inspecting `DisturbanceSchedule`s.
impl DisturbanceSchedule {
    /// The distance between consecutive events (zero for an empty schedule).
    pub fn period(&self) -> usize {
        self.period
    }

    /// The scheduled event times, in increasing order.
    pub fn times(&self) -> &[usize] {
        &self.times
    }

    /// The number of scheduled events.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// True if a disturbance is scheduled for the given step.
    pub fn is_scheduled(&self, step: usize) -> bool {
        self.times.contains(&step)
    }
}

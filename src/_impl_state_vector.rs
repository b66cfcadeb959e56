use crate::StateVector;
use rand::Rng;
use std::fmt::{Debug, Display, Formatter};

/* The underlying bitvector::BitVector does not implement Eq, but we want to. */
impl Eq for StateVector {}

impl StateVector {
    /// **(internal)** Check if the given index is valid in this `StateVector` - panic
    /// otherwise. Only enabled when `shields_up` is set.
    fn check_access(&self, index: usize) {
        if cfg!(shields_up) && index >= self.len {
            panic!(
                "Accessing node {} in a StateVector of length {}.",
                index, self.len
            );
        }
    }

    /// Create a new `StateVector` of the given length with every node off.
    pub fn empty(len: usize) -> StateVector {
        StateVector {
            len,
            values: bitvector::BitVector::new(len),
        }
    }

    /// Sample a fresh `StateVector` where every node is independently on with the
    /// given probability.
    ///
    /// The probability must lie in `[0, 1]`; the network operations validate this
    /// before sampling.
    pub fn random(len: usize, probability: f64, rng: &mut impl Rng) -> StateVector {
        let mut state = StateVector::empty(len);
        for index in 0..len {
            if rng.random_bool(probability) {
                state.values.insert(index);
            }
        }
        state
    }

    /// The number of nodes in this `StateVector`.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Get the boolean value at the given `index`.
    pub fn get(&self, index: usize) -> bool {
        self.check_access(index);
        self.values.contains(index)
    }

    /// Set the boolean `value` at the given `index`.
    pub fn set(&mut self, index: usize, value: bool) {
        self.check_access(index);
        if value {
            self.values.insert(index);
        } else {
            self.values.remove(index);
        }
    }

    /// Invert the value at the given `index`.
    pub fn flip(&mut self, index: usize) {
        self.check_access(index);
        if self.values.contains(index) {
            self.values.remove(index);
        } else {
            self.values.insert(index);
        }
    }

    /// Return a vector of the values in this `StateVector`.
    pub fn values(&self) -> Vec<bool> {
        (0..self.len).map(|i| self.get(i)).collect()
    }

    /// A vector of the indices of the nodes which are on.
    pub fn ones(&self) -> Vec<usize> {
        self.values.iter().collect()
    }

    /// A vector of the indices of the nodes which are off.
    pub fn zeros(&self) -> Vec<usize> {
        (0..self.len).filter(|i| !self.get(*i)).collect()
    }
}

impl Display for StateVector {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "SV({})[", self.len)?;
        let mut first = true;
        for i in 0..self.len {
            if self.get(i) {
                if !first {
                    write!(f, " ")?;
                }
                write!(f, "{}", i)?;
                first = false;
            }
        }
        write!(f, "]")?;
        Ok(())
    }
}

impl Debug for StateVector {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "StateVector({})[", self.len)?;
        let mut first = true;
        for i in 0..self.len {
            if self.get(i) {
                if !first {
                    write!(f, " ")?;
                }
                write!(f, "{}", i)?;
                first = false;
            }
        }
        write!(f, "]")
    }
}

impl From<Vec<bool>> for StateVector {
    fn from(data: Vec<bool>) -> Self {
        let mut state = StateVector::empty(data.len());
        for (index, value) in data.into_iter().enumerate() {
            if value {
                state.values.insert(index);
            }
        }
        state
    }
}

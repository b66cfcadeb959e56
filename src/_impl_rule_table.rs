use crate::{NetworkError, RuleTable, TruthKey, TruthKeyIterator};
use rand::Rng;

/// Methods for safely constructing new instances of `RuleTable`s.
impl RuleTable {
    /// Synthesize a random total rule table of the given arity.
    ///
    /// Each of the `2^arity` keys independently maps to `true` with probability
    /// `activation_probability`. The table is synthesized once, at network
    /// construction, and never regenerated afterwards.
    ///
    /// Returns `Err` if the probability is outside of `[0, 1]` or if a table of this
    /// arity cannot be materialized in memory.
    pub fn random(
        arity: usize,
        activation_probability: f64,
        rng: &mut impl Rng,
    ) -> Result<RuleTable, NetworkError> {
        crate::util::check_probability("Rule activation", activation_probability)?;
        let size = Self::table_size(arity)?;
        let outputs = (0..size)
            .map(|_| rng.random_bool(activation_probability))
            .collect();
        Ok(RuleTable { arity, outputs })
    }

    /// Build a rule table from an explicit output column.
    ///
    /// The outputs are indexed by truth key, i.e. the first output belongs to the
    /// all-false input sequence and the last one to the all-true sequence. The number
    /// of outputs must be a power of two; the arity is derived from it.
    pub fn from_outputs(outputs: Vec<bool>) -> Result<RuleTable, NetworkError> {
        if !outputs.len().is_power_of_two() {
            return Err(NetworkError::InvalidParameter(format!(
                "A total rule table needs a power-of-two number of outputs, got {}.",
                outputs.len()
            )));
        }
        let arity = outputs.len().trailing_zeros() as usize;
        Ok(RuleTable { arity, outputs })
    }

    /// **(internal)** The domain size `2^arity`, or an error when it is not
    /// representable.
    fn table_size(arity: usize) -> Result<usize, NetworkError> {
        if arity >= usize::BITS as usize {
            return Err(NetworkError::InvalidParameter(format!(
                "Cannot materialize a rule table of arity {}.",
                arity
            )));
        }
        Ok(1usize << arity)
    }
}

/// Some basic utility methods for inspecting `RuleTable`s.
impl RuleTable {
    /// The number of inputs this rule reads.
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// The number of keys in the domain of this table (`2^arity`).
    pub fn len(&self) -> usize {
        self.outputs.len()
    }

    /// A rule table always covers at least the empty input sequence.
    pub fn is_empty(&self) -> bool {
        self.outputs.is_empty()
    }

    /// The output bit for the given truth key.
    ///
    /// Fails with `InternalConsistency` when the key lies outside the table domain.
    /// For keys produced from the dependency list the table was sized for, this can
    /// never happen.
    pub fn output(&self, key: TruthKey) -> Result<bool, NetworkError> {
        self.outputs
            .get(key.to_table_index())
            .copied()
            .ok_or_else(|| {
                NetworkError::InternalConsistency(format!(
                    "Key {:?} is not in the domain of a rule table of arity {}.",
                    key, self.arity
                ))
            })
    }

    /// An iterator over the full key domain of this table, in numeric order.
    pub fn keys(&self) -> TruthKeyIterator {
        (0..self.outputs.len() as u64).map(TruthKey)
    }
}

#[cfg(test)]
mod tests {
    use crate::{NetworkError, RuleTable, TruthKey};
    use pretty_assertions::assert_eq;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_table_is_total() {
        let mut rng = SmallRng::seed_from_u64(42);
        for arity in 1..6 {
            let table = RuleTable::random(arity, 0.5, &mut rng).unwrap();
            assert_eq!(arity, table.arity());
            assert_eq!(1usize << arity, table.len());
            // The key domain is exactly the encoded input enumeration.
            let keys: Vec<TruthKey> = table.keys().collect();
            let encoded: Vec<TruthKey> = TruthKey::enumerate_inputs(arity)
                .map(TruthKey::encode)
                .collect();
            assert_eq!(encoded, keys);
            for key in keys {
                assert!(table.output(key).is_ok());
            }
        }
    }

    #[test]
    fn test_activation_probability_extremes() {
        let mut rng = SmallRng::seed_from_u64(42);
        let always_off = RuleTable::random(3, 0.0, &mut rng).unwrap();
        let always_on = RuleTable::random(3, 1.0, &mut rng).unwrap();
        for key in always_off.keys() {
            assert!(!always_off.output(key).unwrap());
            assert!(always_on.output(key).unwrap());
        }
    }

    #[test]
    fn test_invalid_activation_probability() {
        let mut rng = SmallRng::seed_from_u64(42);
        assert!(matches!(
            RuleTable::random(2, -0.5, &mut rng),
            Err(NetworkError::InvalidParameter(_))
        ));
        assert!(matches!(
            RuleTable::random(2, 1.5, &mut rng),
            Err(NetworkError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_unrepresentable_arity() {
        let mut rng = SmallRng::seed_from_u64(42);
        assert!(matches!(
            RuleTable::random(usize::BITS as usize, 0.5, &mut rng),
            Err(NetworkError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_from_outputs() {
        let table = RuleTable::from_outputs(vec![false, true]).unwrap();
        assert_eq!(1, table.arity());
        assert!(!table.output(TruthKey::encode([false])).unwrap());
        assert!(table.output(TruthKey::encode([true])).unwrap());

        assert!(matches!(
            RuleTable::from_outputs(vec![false, true, true]),
            Err(NetworkError::InvalidParameter(_))
        ));
        assert!(matches!(
            RuleTable::from_outputs(Vec::new()),
            Err(NetworkError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_missing_key_is_internal_consistency() {
        let table = RuleTable::from_outputs(vec![true, false, false, true]).unwrap();
        let outside = TruthKey::encode([true, false, false]);
        assert!(matches!(
            table.output(outside),
            Err(NetworkError::InternalConsistency(_))
        ));
    }
}

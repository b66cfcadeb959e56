use crate::{InputPatternIterator, TruthKey};

impl TruthKey {
    /// Encode an ordered sequence of boolean values into its canonical key.
    ///
    /// The first value maps to the most significant bit of the key, so the numeric
    /// order of keys matches the lexicographic order of the input sequences. No two
    /// distinct sequences of the same length produce the same key.
    ///
    /// Sequences longer than 64 values are not representable (such rule tables cannot
    /// be materialized in the first place).
    pub fn encode<I: IntoIterator<Item = bool>>(values: I) -> TruthKey {
        let mut key: u64 = 0;
        let mut length: u32 = 0;
        for value in values {
            debug_assert!(length < u64::BITS, "Truth key inputs wider than 64 bits.");
            key = (key << 1) | u64::from(value);
            length += 1;
        }
        TruthKey(key)
    }

    /// Enumerate all `2^arity` boolean input sequences of the given arity in
    /// lexicographic order.
    ///
    /// For arity two, the sequences are `(0,0), (0,1), (1,0), (1,1)`. Arity zero
    /// produces a single empty sequence. This is only needed at rule-construction
    /// time (and in tests), never on the transition path.
    pub fn enumerate_inputs(arity: usize) -> InputPatternIterator {
        assert!(
            arity < u64::BITS as usize,
            "Cannot enumerate inputs of arity {}.",
            arity
        );
        InputPatternIterator {
            arity,
            next: 0,
            end: 1u64 << arity,
        }
    }

    /// **(internal)** The position of this key in a dense rule table.
    pub(crate) fn to_table_index(self) -> usize {
        self.0 as usize
    }
}

impl Iterator for InputPatternIterator {
    type Item = Vec<bool>;

    fn next(&mut self) -> Option<Vec<bool>> {
        if self.next == self.end {
            return None;
        }
        let key = self.next;
        self.next += 1;
        let sequence = (0..self.arity)
            .rev()
            .map(|bit| (key >> bit) & 1 == 1)
            .collect();
        Some(sequence)
    }
}

use crate::NetworkError;

/// Check that the probability parameter with the given human-readable name lies
/// in `[0, 1]` (this also rejects NaN).
pub(crate) fn check_probability(name: &str, value: f64) -> Result<(), NetworkError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(NetworkError::InvalidParameter(format!(
            "{} probability {} is outside of [0, 1].",
            name, value
        )))
    }
}

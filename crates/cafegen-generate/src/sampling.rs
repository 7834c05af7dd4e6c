use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::errors::GenerationError;

/// Weighted choice over an enumerated domain, configured with
/// `(value, weight)` pairs.
#[derive(Debug, Clone)]
pub struct WeightedChoice<T> {
    entries: Vec<(T, f64)>,
    total: f64,
}

impl<T> WeightedChoice<T> {
    pub fn new(entries: Vec<(T, f64)>) -> Result<Self, GenerationError> {
        if entries.is_empty() {
            return Err(GenerationError::InvalidParams(
                "weighted choice requires at least one entry".to_string(),
            ));
        }
        let mut total = 0.0;
        for (_, weight) in &entries {
            if *weight <= 0.0 {
                return Err(GenerationError::InvalidParams(
                    "weighted choice weight must be > 0".to_string(),
                ));
            }
            total += weight;
        }
        Ok(Self { entries, total })
    }

    pub fn pick(&self, rng: &mut ChaCha8Rng) -> &T {
        let mut roll = rng.random_range(0.0..self.total);
        for (value, weight) in &self.entries {
            if roll < *weight {
                return value;
            }
            roll -= *weight;
        }
        // Float rounding can leave a sliver past the last band.
        &self.entries[self.entries.len() - 1].0
    }
}

/// Uniform choice over a non-empty slice.
pub fn uniform<'a, T>(values: &'a [T], rng: &mut ChaCha8Rng) -> &'a T {
    &values[rng.random_range(0..values.len())]
}

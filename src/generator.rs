//! ArrayGenerator - random integer sequences under a generation policy
//!
//! Produces the input arrays the benchmark harness (and the menu layer)
//! consume. The RNG is owned and injected, never a process-wide global,
//! so a fixed seed reproduces the exact same sequences in tests.

use crate::core_types::{MAX_ELEMENTS, Value};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// How the effective element count is derived.
///
/// Negative or zero dimensions are coerced to 1 during resolution; the
/// resulting count is capped at [`MAX_ELEMENTS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeMode {
    /// count = N
    Linear(i64),
    /// count = N * N
    Square(i64),
    /// count = N * M
    Rect(i64, i64),
}

impl SizeMode {
    /// Resolve the effective element count.
    ///
    /// Coerces non-positive dimensions to 1 and caps the product at
    /// [`MAX_ELEMENTS`]. The multiplication happens in u128 so N*N cannot
    /// overflow before the cap applies.
    pub fn resolve(&self) -> usize {
        let count = match *self {
            SizeMode::Linear(n) => n.max(1) as u128,
            SizeMode::Square(n) => {
                let n = n.max(1) as u128;
                n * n
            }
            SizeMode::Rect(n, m) => n.max(1) as u128 * m.max(1) as u128,
        };
        count.min(MAX_ELEMENTS as u128) as usize
    }
}

/// Generation policy: size, value range, duplicate handling.
#[derive(Debug, Clone, Copy)]
pub struct GenerationPolicy {
    pub size_mode: SizeMode,
    pub min_value: Value,
    pub max_value: Value,
    pub allow_duplicates: bool,
}

impl GenerationPolicy {
    /// Linear-size policy over the original program's default range [1, 100000],
    /// duplicates allowed. This is what the benchmark suite feeds the sorts.
    pub fn linear(n: i64) -> Self {
        Self {
            size_mode: SizeMode::Linear(n),
            min_value: 1,
            max_value: 100_000,
            allow_duplicates: true,
        }
    }
}

/// Random array generator with an owned, seedable RNG.
pub struct ArrayGenerator {
    rng: StdRng,
}

impl ArrayGenerator {
    /// Create a generator seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a generator with a fixed seed (reproducible output).
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate a sequence satisfying `policy`.
    ///
    /// Normalization instead of rejection:
    /// - inverted ranges (min > max) are silently swapped
    /// - non-positive dimensions become 1, counts cap at [`MAX_ELEMENTS`]
    /// - in no-duplicates mode a too-small range is widened upward so that
    ///   `max = min + count - 1` holds before sampling; if the upper bound
    ///   would pass [`Value::MAX`] the window slides down instead
    ///
    /// Duplicates allowed: every position drawn independently, uniform over
    /// `[min, max]` inclusive. Duplicates forbidden: materialize the full
    /// value pool, Fisher-Yates shuffle, truncate to `count` (unbiased subset,
    /// no repeats).
    pub fn generate(&mut self, policy: &GenerationPolicy) -> Vec<Value> {
        let count = policy.size_mode.resolve();
        let (mut min, mut max) = if policy.min_value <= policy.max_value {
            (policy.min_value, policy.max_value)
        } else {
            (policy.max_value, policy.min_value)
        };

        if policy.allow_duplicates {
            (0..count).map(|_| self.rng.gen_range(min..=max)).collect()
        } else {
            let range = (max as i128 - min as i128 + 1) as u128;
            if range < count as u128 {
                // Widen upward; if that would pass the Value ceiling, slide
                // the window down instead so the pool still holds `count`
                // distinct values.
                max = min.saturating_add(count as Value - 1);
                min = max - (count as Value - 1);
            }
            let mut pool: Vec<Value> = (min..=max).collect();
            pool.shuffle(&mut self.rng);
            pool.truncate(count);
            pool
        }
    }
}

impl Default for ArrayGenerator {
    fn default() -> Self {
        Self::new()
    }
}

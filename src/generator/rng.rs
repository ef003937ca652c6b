use chrono::{Datelike, NaiveDate};

// Knuth's MMIX linear congruential constants.
const LCG_MULTIPLIER: u64 = 6364136223846793005;
const LCG_INCREMENT: u64 = 1442695040888963407;

/// Integer seed for a calendar date: the decimal concatenation of year,
/// month, and day (2024-06-01 becomes 20240601), matching the seed every
/// client derives for that day.
pub fn date_seed(date: NaiveDate) -> u64 {
    let packed =
        i64::from(date.year()) * 10_000 + i64::from(date.month()) * 100 + i64::from(date.day());
    packed as u64
}

/// Explicit linear congruential generator.
///
/// `state' = state * 6364136223846793005 + 1442695040888963407 (mod 2^64)`
///
/// The whole point of this type is reproducibility: the same seed yields the
/// same draw sequence on every machine, so a platform random source (or a
/// floating-point trick like `frac(sin(seed) * 10000)`) is not an option.
/// Draws advance the internal state, so successive draws are distinguishable
/// without any sub-seed derivation. Not suitable for anything
/// security-sensitive.
#[derive(Debug, Clone)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT);
        self.state
    }

    /// Next draw in `[0, bound)`. The low bits of an LCG are weak, so the
    /// draw comes from the upper half of the state.
    pub fn next_index(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0);
        ((self.next_u64() >> 32) % bound as u64) as usize
    }

    /// Next draw in `[low, high]`.
    pub fn next_in(&mut self, low: i64, high: i64) -> i64 {
        debug_assert!(low <= high);
        let span = (high - low + 1) as usize;
        low + self.next_index(span) as i64
    }

    /// Deterministic Fisher-Yates shuffle driven by this generator.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.next_index(i + 1);
            items.swap(i, j);
        }
    }
}

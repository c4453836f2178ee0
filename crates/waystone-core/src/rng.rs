//! Seeded linear congruential generator.
//!
//! The generator's only job is reproducibility: an identical seed and an
//! identical call sequence must produce identical output on every platform.
//! Statistical quality is secondary, so the modulo bias in `int_in` is
//! accepted.

use crate::constants::EMPTY_TILE;

const LCG_MULTIPLIER: u64 = 6364136223846793005;
const LCG_INCREMENT: u64 = 1442695040888963407;

/// Deterministic 64-bit LCG with the Numerical Recipes constants.
#[derive(Debug, Clone)]
pub struct ChunkRng {
    state: u64,
}

impl ChunkRng {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Next raw 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT);
        self.state
    }

    /// Uniform float in `[0, 1)` from the top 53 bits.
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform integer in `[0, n)`. Returns 0 when `n` is 0.
    pub fn int_in(&mut self, n: u64) -> u64 {
        if n == 0 {
            return 0;
        }
        self.next_u64() % n
    }

    /// Uniform integer in `[min, max]`, inclusive on both ends.
    /// Returns `min` when the range is empty or a single value.
    pub fn int_range(&mut self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        min + self.int_in((max - min + 1) as u64) as i32
    }

    /// A uniformly chosen glyph, or the empty glyph for an empty slice.
    pub fn choice(&mut self, items: &[char]) -> char {
        if items.is_empty() {
            return EMPTY_TILE;
        }
        items[self.int_in(items.len() as u64) as usize]
    }

    /// Fisher-Yates shuffle, drawing `int_in(i + 1)` for i from the back.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.int_in(i as u64 + 1) as usize;
            items.swap(i, j);
        }
    }
}

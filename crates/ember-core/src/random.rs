//! Injectable randomness for visual variety.
//!
//! Engines never reach for a global RNG; callers hand in something that
//! implements [`Randomness`]. Production uses [`SeededRandom`] drawn from
//! entropy, tests use a fixed seed or one of the deterministic doubles.

use rand::prelude::*;

/// Source of uniform values in `[0, 1)`.
pub trait Randomness {
    fn next_unit(&mut self) -> f32;

    /// Uniform value in `[lo, hi)`.
    fn range(&mut self, lo: f32, hi: f32) -> f32 {
        lo + (hi - lo) * self.next_unit()
    }

    /// Uniform value in `[-half_extent, half_extent)`.
    fn signed(&mut self, half_extent: f32) -> f32 {
        self.range(-half_extent, half_extent)
    }

    /// Index in `0..len`; `len` of zero yields 0.
    fn index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        ((self.next_unit() * len as f32) as usize).min(len - 1)
    }

    fn chance(&mut self, probability: f32) -> bool {
        self.next_unit() < probability
    }
}

/// `StdRng`-backed source.
#[derive(Clone, Debug)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl Randomness for SeededRandom {
    fn next_unit(&mut self) -> f32 {
        self.rng.gen::<f32>()
    }
}

/// Always returns the same unit value. Every particle spawned from it gets
/// identical speed, size and jitter.
#[derive(Clone, Copy, Debug)]
pub struct FixedRandom(pub f32);

impl Randomness for FixedRandom {
    fn next_unit(&mut self) -> f32 {
        self.0.clamp(0.0, 0.999_999)
    }
}

/// Cycles through a fixed list of unit values.
#[derive(Clone, Debug)]
pub struct SequenceRandom {
    values: Vec<f32>,
    cursor: usize,
}

impl SequenceRandom {
    pub fn new(values: Vec<f32>) -> Self {
        Self { values, cursor: 0 }
    }
}

impl Randomness for SequenceRandom {
    fn next_unit(&mut self) -> f32 {
        if self.values.is_empty() {
            return 0.0;
        }
        let v = self.values[self.cursor % self.values.len()];
        self.cursor = self.cursor.wrapping_add(1);
        v.clamp(0.0, 0.999_999)
    }
}

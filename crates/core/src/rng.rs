//! RNG module - the random service consumed by the engine
//!
//! The engine never seeds or owns global randomness. Everything random
//! (tile colors, pattern tiers, the star roll, hint sampling) goes through a
//! [`RandomSource`] handed in by the caller.
//!
//! Also provides a simple LCG for deterministic games and tests.

/// Uniform random draws used by tile generation and hint search.
pub trait RandomSource {
    /// Uniform integer in `min..=max`. Returns `min` when `max <= min`.
    ///
    /// Implementations must consume randomness on every call, even for an
    /// empty range, so draw sequences stay aligned.
    fn int_inclusive(&mut self, min: u32, max: u32) -> u32;

    /// Uniformly pick one element, or `None` for an empty slice.
    fn pick<T: Copy>(&mut self, items: &[T]) -> Option<T> {
        if items.is_empty() {
            return None;
        }
        let i = self.int_inclusive(0, (items.len() - 1) as u32) as usize;
        items.get(i).copied()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn int_inclusive(&mut self, min: u32, max: u32) -> u32 {
        (**self).int_inclusive(min, max)
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Current internal state (for restarting with the same sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl RandomSource for SimpleRng {
    fn int_inclusive(&mut self, min: u32, max: u32) -> u32 {
        let raw = self.next_u32();
        if max <= min {
            return min;
        }
        let span = (max - min) as u64 + 1;
        // Multiply-shift keeps the high bits; the low bits of an LCG cycle
        // with a short period.
        min + ((raw as u64 * span) >> 32) as u32
    }
}

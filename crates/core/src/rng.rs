//! RNG module - seeded gem generation
//!
//! Implements a simple LCG so that a seed reproduces a board exactly.
//! Random boards drawn with the same seed are identical, which keeps
//! sessions replayable and tests deterministic.

use same_game_types::{GemKind, GEM_KINDS};

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

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Draw a gem kind uniformly from the palette
    pub fn gem(&mut self) -> GemKind {
        let index = self.next_range(GEM_KINDS as u32) as usize;
        GemKind::ALL[index]
    }

    /// Current RNG state (for replaying a session with the same sequence)
    pub fn seed(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

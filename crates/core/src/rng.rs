//! Deterministic piece randomness.
//!
//! A plain LCG: small, seedable, and reproducible, which is all the
//! piece draw needs. Pieces are drawn uniformly over the seven kinds;
//! there is deliberately no bag, so droughts and repeats happen the way
//! they did on the cabinet.

/// Linear congruential generator (Numerical Recipes constants).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Seed the generator. Seed 0 is remapped to 1, which would
    /// otherwise take an extra step to leave the zero state.
    pub fn new(seed: u32) -> Self {
        let state = if seed == 0 { 1 } else { seed };
        SimpleRng { state }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        self.state
    }

    /// Random value in `[0, max)`. `max` must be nonzero.
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Current internal state; reseeding with it continues the stream.
    pub fn state(&self) -> u32 {
        self.state
    }
}

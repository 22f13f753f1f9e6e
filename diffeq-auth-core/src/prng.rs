//! Xorshift32 — the deterministic stream behind field initialization
//! and the hardened variant's per-tick seed noise.
//!
//! The generator is an explicit value: every `respond` call owns its
//! generators, so concurrent calls never share state.

use rand_core::{impls, Error, RngCore};

use crate::constants::ZERO_SEED_SUBSTITUTE;

/// Marsaglia xorshift32 (shifts 13/17/5). Period 2^32 − 1 over nonzero
/// states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Xorshift32 {
    state: u32,
}

impl Xorshift32 {
    /// Creates a generator seeded with `seed`. Seed `0` is replaced by
    /// [`ZERO_SEED_SUBSTITUTE`].
    pub fn new(seed: u32) -> Self {
        let state = if seed == 0 { ZERO_SEED_SUBSTITUTE } else { seed };
        Self { state }
    }

    /// Advances the generator and returns the new state.
    pub fn next_state(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Draws a value in `[0, 1]` from the low 16 bits of the next state.
    pub fn next_unit(&mut self) -> f32 {
        (self.next_state() & 0xFFFF) as f32 / 65535.0
    }
}

impl RngCore for Xorshift32 {
    fn next_u32(&mut self) -> u32 {
        self.next_state()
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

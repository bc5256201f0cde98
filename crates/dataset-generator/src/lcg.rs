//! Linear congruential pseudo-random stream.
//!
//! `state' = (1664525 * state + 1013904223) mod 2^32`, each draw returning
//! `state' / 2^32`. Not cryptographically secure; the point is an exact,
//! portable recurrence that reference vectors can pin down.

use rand::{Error, RngCore, SeedableRng};

/// Multiplier of the recurrence.
pub const LCG_MULTIPLIER: u32 = 1_664_525;

/// Increment of the recurrence.
pub const LCG_INCREMENT: u32 = 1_013_904_223;

const MODULUS: f64 = 4_294_967_296.0;

/// Seeded 32-bit LCG.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    /// Create a stream starting at `seed`.
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Current internal state.
    pub fn state(&self) -> u32 {
        self.state
    }

    /// Advance the state once and return it.
    pub fn next_state(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT);
        self.state
    }

    /// Draw a float in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_state()) / MODULUS
    }
}

impl RngCore for Lcg {
    fn next_u32(&mut self) -> u32 {
        self.next_state()
    }

    fn next_u64(&mut self) -> u64 {
        let high = u64::from(self.next_state());
        let low = u64::from(self.next_state());
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_state().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Lcg {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}

//! Individual field generators.
//!
//! Each generator consumes draws from a [`Draw`] source. The row generator
//! calls them in the fixed per-row order, so none of them may consume more
//! than one draw.

pub mod numeric;
pub mod pattern;
pub mod timestamp;

use crate::lcg::Lcg;

/// Source of uniform draws in `[0, 1)`.
pub trait Draw {
    /// Draw the next value.
    fn draw(&mut self) -> f64;
}

impl Draw for Lcg {
    fn draw(&mut self) -> f64 {
        self.next_f64()
    }
}

/// Index into a pool of `len` entries: `floor(draw * len)`.
///
/// Callers guarantee `len > 0`.
pub fn pick_index<D: Draw>(rng: &mut D, len: usize) -> usize {
    let index = (rng.draw() * len as f64).floor() as usize;
    index.min(len.saturating_sub(1))
}

/// Pick one entry of a non-empty pool.
pub fn pick<'a, T, D: Draw>(pool: &'a [T], rng: &mut D) -> &'a T {
    &pool[pick_index(rng, pool.len())]
}

#[cfg(test)]
pub(crate) mod testing {
    use super::Draw;
    use std::collections::VecDeque;

    /// Replays a fixed list of draws.
    pub struct FixedDraws(pub VecDeque<f64>);

    impl FixedDraws {
        pub fn new(draws: &[f64]) -> Self {
            Self(draws.iter().copied().collect())
        }
    }

    impl Draw for FixedDraws {
        fn draw(&mut self) -> f64 {
            self.0.pop_front().expect("ran out of fixed draws")
        }
    }
}

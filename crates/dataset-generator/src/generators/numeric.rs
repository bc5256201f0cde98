//! Amount generator.

use super::Draw;

/// Draw an amount uniformly in `[min, max]`, rounded to cents.
pub fn generate_amount<D: Draw>(rng: &mut D, min: f64, max: f64) -> f64 {
    let raw = min + rng.draw() * (max - min);
    round_cents(raw).max(min).min(max)
}

/// Round to two decimal places, halves rounding up.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0 + 0.5).floor() / 100.0
}

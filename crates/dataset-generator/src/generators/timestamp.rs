//! Creation timestamp generator.

use super::Draw;
use chrono::{DateTime, Duration, SecondsFormat, Utc};

/// Draw a whole-day offset in `[0, max_days)` and add it to `base`.
///
/// Dates past the representable range clamp to [`DateTime::<Utc>::MAX_UTC`].
pub fn generate_created_at<D: Draw>(
    rng: &mut D,
    base: DateTime<Utc>,
    max_days: u32,
) -> String {
    let offset = (rng.draw() * f64::from(max_days)).floor() as i64;
    let created = base
        .checked_add_signed(Duration::days(offset))
        .unwrap_or(DateTime::<Utc>::MAX_UTC);
    format_iso(created)
}

/// ISO 8601 with millisecond precision and a `Z` suffix.
pub fn format_iso(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

//! Lenient coercions shared by filters and sorts.
//!
//! Every coercion returns `Option` rather than an error: `None` is the
//! "not a number" / "invalid date" marker the predicates branch on.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use grid_core::{CellValue, FilterValue};

/// Cell as a string; null becomes `""`.
pub fn cell_to_string(value: &CellValue) -> String {
    value.to_string()
}

/// Filter value as a string; null becomes `""`, lists join with `,`.
pub fn filter_to_string(value: &FilterValue) -> String {
    value.to_string()
}

/// Cell as a finite number.
pub fn cell_to_number(value: &CellValue) -> Option<f64> {
    match value {
        CellValue::Int(i) => Some(*i as f64),
        CellValue::Float(f) => Some(*f).filter(|f| f.is_finite()),
        CellValue::Text(s) => parse_number(s),
        CellValue::Null => None,
    }
}

/// Filter value as a finite number.
///
/// Booleans count as `1`/`0`; a list only coerces when its joined form
/// parses (a single numeric entry).
pub fn filter_to_number(value: &FilterValue) -> Option<f64> {
    match value {
        FilterValue::Null => None,
        FilterValue::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        FilterValue::Number(n) => Some(*n).filter(|n| n.is_finite()),
        FilterValue::Text(s) => parse_number(s),
        FilterValue::List(_) => parse_number(&value.to_string()),
    }
}

/// Parse trimmed text as a finite number. Empty text is not a number.
pub fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Cell as epoch milliseconds. Only text cells hold timestamps.
pub fn cell_to_timestamp(value: &CellValue) -> Option<i64> {
    value.as_str().and_then(parse_timestamp_millis)
}

/// Filter value as epoch milliseconds. Only text filters hold timestamps.
pub fn filter_to_timestamp(value: &FilterValue) -> Option<i64> {
    match value {
        FilterValue::Text(s) => parse_timestamp_millis(s),
        _ => None,
    }
}

/// Parse a timestamp into epoch milliseconds.
///
/// Accepts RFC 3339, a zone-less `YYYY-MM-DDTHH:MM:SS[.fff]` (read as UTC)
/// and a bare `YYYY-MM-DD` (UTC midnight).
pub fn parse_timestamp_millis(text: &str) -> Option<i64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.timestamp_millis());
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc().timestamp_millis());
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc().timestamp_millis());
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("100"), Some(100.0));
        assert_eq!(parse_number("  12.5 "), Some(12.5));
        assert_eq!(parse_number("1e3"), Some(1000.0));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("   "), None);
        assert_eq!(parse_number("not-a-number"), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("NaN"), None);
    }

    #[test]
    fn test_cell_to_number() {
        assert_eq!(cell_to_number(&CellValue::Int(3)), Some(3.0));
        assert_eq!(cell_to_number(&CellValue::Float(f64::NAN)), None);
        assert_eq!(cell_to_number(&CellValue::Text("7".into())), Some(7.0));
        assert_eq!(cell_to_number(&CellValue::Null), None);
    }

    #[test]
    fn test_filter_to_number() {
        assert_eq!(filter_to_number(&FilterValue::Bool(true)), Some(1.0));
        assert_eq!(filter_to_number(&FilterValue::Number(150.0)), Some(150.0));
        assert_eq!(filter_to_number(&FilterValue::Text("10000".into())), Some(10000.0));
        assert_eq!(filter_to_number(&FilterValue::list(["5"])), Some(5.0));
        assert_eq!(filter_to_number(&FilterValue::list(["5", "6"])), None);
        assert_eq!(filter_to_number(&FilterValue::Null), None);
    }

    #[test]
    fn test_parse_timestamp_formats() {
        let rfc = parse_timestamp_millis("2020-01-02T00:00:00.000Z").unwrap();
        assert_eq!(rfc, 1_577_923_200_000);

        let naive = parse_timestamp_millis("2020-01-02T00:00:00").unwrap();
        assert_eq!(naive, rfc);

        let date_only = parse_timestamp_millis("2020-01-02").unwrap();
        assert_eq!(date_only, rfc);

        let offset = parse_timestamp_millis("2020-01-02T01:00:00+01:00").unwrap();
        assert_eq!(offset, rfc);
    }

    #[test]
    fn test_invalid_timestamps() {
        assert_eq!(parse_timestamp_millis(""), None);
        assert_eq!(parse_timestamp_millis("yesterday"), None);
        assert_eq!(parse_timestamp_millis("2020-13-45"), None);
        assert_eq!(cell_to_timestamp(&CellValue::Int(5)), None);
        assert_eq!(filter_to_timestamp(&FilterValue::Number(5.0)), None);
    }
}

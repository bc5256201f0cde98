//! Sort comparators.
//!
//! Signature: `(row_a, row_b, column) -> Ordering`, ascending. Values that
//! cannot be read as the comparator's type sort after all valid values and
//! compare equal among themselves.

use crate::value::{cell_to_number, cell_to_string, cell_to_timestamp};
use crate::GetValue;
use grid_core::{CellValue, ColumnId, Status};
use std::cmp::Ordering;

/// Numeric ascending; non-numeric last.
pub fn sort_by_number<R: GetValue + ?Sized>(row_a: &R, row_b: &R, column: ColumnId) -> Ordering {
    let a = cell_to_number(&row_a.get_value(column));
    let b = cell_to_number(&row_b.get_value(column));

    compare_valid_first(a, b, |a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
}

/// Case-insensitive string ascending.
///
/// Lowercased forms are compared by Unicode scalar value, which matches
/// locale collation for the ASCII vocabulary the generator produces.
pub fn sort_by_string<R: GetValue + ?Sized>(row_a: &R, row_b: &R, column: ColumnId) -> Ordering {
    let a = cell_to_string(&row_a.get_value(column)).to_lowercase();
    let b = cell_to_string(&row_b.get_value(column)).to_lowercase();

    a.cmp(&b)
}

/// Active < Pending < Inactive < anything else.
pub fn sort_by_status<R: GetValue + ?Sized>(row_a: &R, row_b: &R, column: ColumnId) -> Ordering {
    let a = status_rank(&row_a.get_value(column));
    let b = status_rank(&row_b.get_value(column));

    a.cmp(&b)
}

/// Timestamp ascending; invalid dates last.
pub fn sort_by_date<R: GetValue + ?Sized>(row_a: &R, row_b: &R, column: ColumnId) -> Ordering {
    let a = cell_to_timestamp(&row_a.get_value(column));
    let b = cell_to_timestamp(&row_b.get_value(column));

    compare_valid_first(a, b, |a, b| a.cmp(b))
}

/// Rank of a status cell; values outside the enumeration share the last
/// rank.
fn status_rank(value: &CellValue) -> u8 {
    value
        .as_str()
        .and_then(|s| s.parse::<Status>().ok())
        .map(|status| status.rank())
        .unwrap_or(u8::MAX)
}

fn compare_valid_first<T>(
    a: Option<T>,
    b: Option<T>,
    cmp: impl Fn(&T, &T) -> Ordering,
) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => cmp(&a, &b),
    }
}

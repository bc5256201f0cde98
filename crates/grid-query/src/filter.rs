//! Filter predicates.
//!
//! Signature: `(row, column, filter_value) -> bool`. An empty or unusable
//! filter value always passes; an unusable cell fails only the numeric and
//! date predicates.

use crate::value::{
    cell_to_number, cell_to_string, cell_to_timestamp, filter_to_number, filter_to_string,
    filter_to_timestamp,
};
use crate::GetValue;
use grid_core::{ColumnId, FilterValue};

/// Case-insensitive "contains". Empty or whitespace-only filter passes.
pub fn includes_string<R: GetValue + ?Sized>(
    row: &R,
    column: ColumnId,
    filter_value: &FilterValue,
) -> bool {
    let search = filter_to_string(filter_value).trim().to_lowercase();
    if search.is_empty() {
        return true;
    }

    cell_to_string(&row.get_value(column))
        .to_lowercase()
        .contains(&search)
}

/// Case-insensitive equality against the trimmed filter. Empty filter passes.
pub fn equals_string<R: GetValue + ?Sized>(
    row: &R,
    column: ColumnId,
    filter_value: &FilterValue,
) -> bool {
    let expected = filter_to_string(filter_value);
    let expected = expected.trim();
    if expected.is_empty() {
        return true;
    }

    cell_to_string(&row.get_value(column)).to_lowercase() == expected.to_lowercase()
}

/// Membership of the stringified cell in the filter list.
///
/// Null or an empty list passes; a scalar is a one-element list. The match
/// is case-sensitive.
pub fn in_array<R: GetValue + ?Sized>(
    row: &R,
    column: ColumnId,
    filter_value: &FilterValue,
) -> bool {
    let values: &[FilterValue] = match filter_value {
        FilterValue::Null => return true,
        FilterValue::List(values) => values.as_slice(),
        scalar => std::slice::from_ref(scalar),
    };
    if values.is_empty() {
        return true;
    }

    let cell = cell_to_string(&row.get_value(column));
    values.iter().any(|value| filter_to_string(value) == cell)
}

/// `cell >= threshold`. A non-numeric threshold passes; a non-numeric cell
/// fails.
pub fn number_greater_or_equal<R: GetValue + ?Sized>(
    row: &R,
    column: ColumnId,
    filter_value: &FilterValue,
) -> bool {
    let Some(threshold) = filter_to_number(filter_value) else {
        return true;
    };

    match cell_to_number(&row.get_value(column)) {
        Some(value) => value >= threshold,
        None => false,
    }
}

/// `cell >= from` on timestamps. An invalid filter date passes; an invalid
/// cell date fails.
pub fn date_on_or_after<R: GetValue + ?Sized>(
    row: &R,
    column: ColumnId,
    filter_value: &FilterValue,
) -> bool {
    let Some(from) = filter_to_timestamp(filter_value) else {
        return true;
    };

    match cell_to_timestamp(&row.get_value(column)) {
        Some(value) => value >= from,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::LooseRow;
    use grid_core::{Row, Status};

    fn row_with_amount(amount: f64) -> Row {
        Row {
            id: 1,
            name: "Alice Smith".to_string(),
            email: "alice.smith1@example.com".to_string(),
            status: Status::Active,
            created_at: "2021-05-10T00:00:00.000Z".to_string(),
            country: "Spain".to_string(),
            amount,
        }
    }

    fn text(s: &str) -> FilterValue {
        FilterValue::Text(s.to_string())
    }

    #[test]
    fn test_includes_string_empty_filter_passes() {
        let row = row_with_amount(1.0);
        assert!(includes_string(&row, ColumnId::Name, &text("")));
        assert!(includes_string(&row, ColumnId::Name, &text("   ")));
        assert!(includes_string(&row, ColumnId::Name, &FilterValue::Null));
    }

    #[test]
    fn test_includes_string_case_insensitive() {
        let row = row_with_amount(1.0);
        assert!(includes_string(&row, ColumnId::Name, &text("SMI")));
        assert!(includes_string(&row, ColumnId::Email, &text(" example ")));
        assert!(!includes_string(&row, ColumnId::Name, &text("bob")));
    }

    #[test]
    fn test_includes_string_null_cell_is_empty() {
        let row = LooseRow::default().null(ColumnId::Name);
        assert!(!includes_string(&row, ColumnId::Name, &text("a")));
        assert!(includes_string(&row, ColumnId::Name, &text(" ")));
    }

    #[test]
    fn test_includes_string_on_numbers() {
        let row = row_with_amount(4478.34);
        assert!(includes_string(&row, ColumnId::Amount, &text("478.3")));
    }

    #[test]
    fn test_equals_string() {
        let row = row_with_amount(1.0);
        assert!(equals_string(&row, ColumnId::Status, &text("active")));
        assert!(equals_string(&row, ColumnId::Status, &text(" Active ")));
        assert!(!equals_string(&row, ColumnId::Status, &text("Act")));
        assert!(equals_string(&row, ColumnId::Status, &text("")));
    }

    #[test]
    fn test_in_array() {
        let row = row_with_amount(1.0);
        assert!(in_array(&row, ColumnId::Country, &FilterValue::Null));
        assert!(in_array(&row, ColumnId::Country, &FilterValue::List(vec![])));
        assert!(in_array(
            &row,
            ColumnId::Country,
            &FilterValue::list(["Japan", "Spain"])
        ));
        assert!(!in_array(&row, ColumnId::Country, &FilterValue::list(["Japan"])));
        assert!(in_array(&row, ColumnId::Country, &text("Spain")));
    }

    #[test]
    fn test_in_array_is_case_sensitive() {
        let row = row_with_amount(1.0);
        assert!(!in_array(&row, ColumnId::Country, &FilterValue::list(["spain"])));
    }

    #[test]
    fn test_in_array_stringifies_numbers() {
        let row = row_with_amount(100.0);
        assert!(in_array(
            &row,
            ColumnId::Amount,
            &FilterValue::List(vec![FilterValue::Number(100.0)])
        ));
        assert!(in_array(&row, ColumnId::Id, &FilterValue::list(["1"])));
    }

    #[test]
    fn test_number_greater_or_equal_thresholds() {
        let row = row_with_amount(100.0);
        assert!(number_greater_or_equal(&row, ColumnId::Amount, &FilterValue::Number(100.0)));
        assert!(!number_greater_or_equal(&row, ColumnId::Amount, &FilterValue::Number(150.0)));
        assert!(number_greater_or_equal(&row, ColumnId::Amount, &text("99.99")));
    }

    #[test]
    fn test_number_greater_or_equal_non_numeric_filter_passes() {
        let row = row_with_amount(100.0);
        assert!(number_greater_or_equal(&row, ColumnId::Amount, &text("not-a-number")));
        assert!(number_greater_or_equal(&row, ColumnId::Amount, &text("")));
        assert!(number_greater_or_equal(&row, ColumnId::Amount, &FilterValue::Null));
    }

    #[test]
    fn test_number_greater_or_equal_non_numeric_cell_fails() {
        let row = LooseRow::default().with(ColumnId::Amount, "lots");
        assert!(!number_greater_or_equal(&row, ColumnId::Amount, &FilterValue::Number(0.0)));

        let row = LooseRow::default().null(ColumnId::Amount);
        assert!(!number_greater_or_equal(&row, ColumnId::Amount, &FilterValue::Number(0.0)));
    }

    #[test]
    fn test_date_on_or_after() {
        let row = row_with_amount(1.0);
        assert!(date_on_or_after(&row, ColumnId::CreatedAt, &text("2021-05-10")));
        assert!(date_on_or_after(&row, ColumnId::CreatedAt, &text("2020-01-01T00:00:00Z")));
        assert!(!date_on_or_after(&row, ColumnId::CreatedAt, &text("2021-05-11")));
    }

    #[test]
    fn test_date_on_or_after_invalid_filter_passes() {
        let row = row_with_amount(1.0);
        assert!(date_on_or_after(&row, ColumnId::CreatedAt, &text("")));
        assert!(date_on_or_after(&row, ColumnId::CreatedAt, &text("someday")));
        assert!(date_on_or_after(&row, ColumnId::CreatedAt, &FilterValue::Null));
    }

    #[test]
    fn test_date_on_or_after_invalid_cell_fails() {
        let row = LooseRow::default().with(ColumnId::CreatedAt, "not a date");
        assert!(!date_on_or_after(&row, ColumnId::CreatedAt, &text("2020-01-01")));
    }
}

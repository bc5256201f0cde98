//! Sort and filter specifications.
//!
//! These are the serializable pieces of grid state the row model consumes.
//! They also parse from the compact command-line forms `amount:desc` and
//! `status=Active` / `country=Spain|Japan`.

use grid_core::{ColumnId, CoreError, FilterValue};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Error type for parsing sort and filter specs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QueryError {
    /// Column key is not a known column
    #[error(transparent)]
    Column(#[from] CoreError),

    /// Sort direction other than `asc` / `desc`
    #[error("Invalid sort direction '{0}', expected 'asc' or 'desc'")]
    InvalidDirection(String),

    /// Filter without `=`
    #[error("Invalid filter '{0}', expected COLUMN=VALUE")]
    InvalidFilter(String),
}

/// One entry of a multi-column sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSort {
    pub id: ColumnId,
    pub desc: bool,
}

impl ColumnSort {
    pub fn asc(id: ColumnId) -> Self {
        Self { id, desc: false }
    }

    pub fn desc(id: ColumnId) -> Self {
        Self { id, desc: true }
    }
}

impl FromStr for ColumnSort {
    type Err = QueryError;

    /// `COLUMN` or `COLUMN:asc` or `COLUMN:desc`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (column, direction) = match s.split_once(':') {
            Some((column, direction)) => (column, Some(direction)),
            None => (s, None),
        };
        let id: ColumnId = column.trim().parse()?;

        let desc = match direction.map(|d| d.trim().to_ascii_lowercase()) {
            None => false,
            Some(d) if d == "asc" => false,
            Some(d) if d == "desc" => true,
            Some(d) => return Err(QueryError::InvalidDirection(d)),
        };

        Ok(Self { id, desc })
    }
}

/// A filter on one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnFilter {
    pub id: ColumnId,
    pub value: FilterValue,
}

impl ColumnFilter {
    pub fn new(id: ColumnId, value: impl Into<FilterValue>) -> Self {
        Self {
            id,
            value: value.into(),
        }
    }
}

impl FromStr for ColumnFilter {
    type Err = QueryError;

    /// `COLUMN=VALUE`; a value containing `|` becomes a list.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (column, value) = s
            .split_once('=')
            .ok_or_else(|| QueryError::InvalidFilter(s.to_string()))?;
        let id: ColumnId = column.trim().parse()?;

        let value = if value.contains('|') {
            FilterValue::list(value.split('|'))
        } else {
            FilterValue::Text(value.to_string())
        };

        Ok(Self { id, value })
    }
}

/// Everything the row model needs to order rows.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuerySpec {
    /// Multi-column sort, highest precedence first
    pub sorting: Vec<ColumnSort>,
    /// Column filters, all of which must pass
    pub column_filters: Vec<ColumnFilter>,
    /// Free-text search across searchable columns
    pub global_filter: String,
}

impl QuerySpec {
    /// Column filters plus one for a non-blank global filter.
    pub fn active_filter_count(&self) -> usize {
        let global = usize::from(!self.global_filter.trim().is_empty());
        self.column_filters.len() + global
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sort() {
        assert_eq!("amount".parse::<ColumnSort>().unwrap(), ColumnSort::asc(ColumnId::Amount));
        assert_eq!(
            "amount:desc".parse::<ColumnSort>().unwrap(),
            ColumnSort::desc(ColumnId::Amount)
        );
        assert_eq!(
            "createdAt:ASC".parse::<ColumnSort>().unwrap(),
            ColumnSort::asc(ColumnId::CreatedAt)
        );
        assert!(matches!(
            "amount:sideways".parse::<ColumnSort>(),
            Err(QueryError::InvalidDirection(_))
        ));
        assert!(matches!(
            "salary".parse::<ColumnSort>(),
            Err(QueryError::Column(_))
        ));
    }

    #[test]
    fn test_parse_filter() {
        assert_eq!(
            "status=Active".parse::<ColumnFilter>().unwrap(),
            ColumnFilter::new(ColumnId::Status, "Active")
        );
        assert_eq!(
            "country=Spain|Japan".parse::<ColumnFilter>().unwrap(),
            ColumnFilter::new(ColumnId::Country, FilterValue::list(["Spain", "Japan"]))
        );
        assert!(matches!(
            "status".parse::<ColumnFilter>(),
            Err(QueryError::InvalidFilter(_))
        ));
    }

    #[test]
    fn test_active_filter_count() {
        let mut spec = QuerySpec::default();
        assert_eq!(spec.active_filter_count(), 0);

        spec.global_filter = "   ".to_string();
        assert_eq!(spec.active_filter_count(), 0);

        spec.global_filter = "ali".to_string();
        spec.column_filters.push(ColumnFilter::new(ColumnId::Status, "Active"));
        assert_eq!(spec.active_filter_count(), 2);
    }

    #[test]
    fn test_spec_json_shape() {
        let spec = QuerySpec {
            sorting: vec![ColumnSort::desc(ColumnId::Amount)],
            column_filters: vec![ColumnFilter::new(ColumnId::Amount, "10000")],
            global_filter: String::new(),
        };
        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(json["sorting"][0]["id"], "amount");
        assert_eq!(json["sorting"][0]["desc"], true);
        assert_eq!(json["columnFilters"][0]["value"], "10000");
        assert_eq!(json["globalFilter"], "");
    }
}

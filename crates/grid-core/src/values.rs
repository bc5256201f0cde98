//! Value representations read from rows and supplied by filters.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw value of one cell, as returned by [`Row::get_value`](crate::Row::get_value).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Integer cell (ids)
    Int(i64),
    /// Floating point cell (amounts)
    Float(f64),
    /// Text cell
    Text(String),
    /// Missing value
    Null,
}

impl CellValue {
    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    /// Null renders as the empty string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(v) => f.write_str(&format_number(*v)),
            Self::Text(s) => f.write_str(s),
            Self::Null => Ok(()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// Value a column filter compares cells against.
///
/// Filters persisted inside views are dynamically shaped (a status filter
/// holds `"Active"`, an amount filter may hold `"10000"` or `10000`, a
/// multi-select holds a list), so this mirrors the JSON value space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum FilterValue {
    /// Absent filter
    #[default]
    Null,
    /// Boolean flag
    Bool(bool),
    /// Numeric threshold
    Number(f64),
    /// Free text
    Text(String),
    /// Multi-value selection
    List(Vec<FilterValue>),
}

impl FilterValue {
    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Build a list filter from string-like values.
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(values.into_iter().map(|v| Self::Text(v.into())).collect())
    }
}

impl fmt::Display for FilterValue {
    /// Null renders as the empty string and lists join with `,`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => f.write_str(&format_number(*n)),
            Self::Text(s) => f.write_str(s),
            Self::List(values) => {
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{value}")?;
                }
                Ok(())
            }
        }
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for FilterValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

/// Format a number the way a JSON consumer prints it: `100` rather than
/// `100.0`, `Infinity` rather than `inf`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else {
        format!("{value}")
    }
}

//! Row, status and column identifier types.

use crate::values::CellValue;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Error type for core type parsing.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CoreError {
    /// Column key does not name a known column
    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    /// Status label is outside the closed enumeration
    #[error("Unknown status: {0}")]
    UnknownStatus(String),
}

// ============================================================================
// Status
// ============================================================================

/// Lifecycle status of a dataset row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Active,
    Pending,
    Inactive,
}

impl Status {
    /// All statuses in generation pool order.
    pub const ALL: [Status; 3] = [Status::Active, Status::Pending, Status::Inactive];

    /// Display label, identical to the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Active => "Active",
            Status::Pending => "Pending",
            Status::Inactive => "Inactive",
        }
    }

    /// Sort rank: Active < Pending < Inactive.
    pub fn rank(&self) -> u8 {
        match self {
            Status::Active => 0,
            Status::Pending => 1,
            Status::Inactive => 2,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = CoreError;

    /// Labels are matched exactly; `"active"` is not a status.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| CoreError::UnknownStatus(s.to_string()))
    }
}

// ============================================================================
// ColumnId
// ============================================================================

/// Identifier of a grid column.
///
/// Serialized with the camelCase keys used by persisted views
/// (`createdAt` rather than `created_at`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColumnId {
    Id,
    Name,
    Email,
    Status,
    Country,
    CreatedAt,
    Amount,
}

impl ColumnId {
    /// All columns in default display order.
    pub const ALL: [ColumnId; 7] = [
        ColumnId::Id,
        ColumnId::Name,
        ColumnId::Email,
        ColumnId::Status,
        ColumnId::Country,
        ColumnId::CreatedAt,
        ColumnId::Amount,
    ];

    /// The string key of this column.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnId::Id => "id",
            ColumnId::Name => "name",
            ColumnId::Email => "email",
            ColumnId::Status => "status",
            ColumnId::Country => "country",
            ColumnId::CreatedAt => "createdAt",
            ColumnId::Amount => "amount",
        }
    }

    /// Resolve a string key, returning `None` for unknown keys.
    pub fn from_key(key: &str) -> Option<ColumnId> {
        ColumnId::ALL.into_iter().find(|column| column.as_str() == key)
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColumnId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColumnId::from_key(s).ok_or_else(|| CoreError::UnknownColumn(s.to_string()))
    }
}

// ============================================================================
// Row
// ============================================================================

/// One synthetic dataset record.
///
/// Rows are immutable once generated; filtering and sorting only ever
/// produce index orders over a row slice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Row {
    /// Sequential identifier starting at 1
    pub id: u64,
    /// Full name, `"{first} {last}"`
    pub name: String,
    /// Unique email address, embeds `id`
    pub email: String,
    /// Lifecycle status
    pub status: Status,
    /// ISO 8601 creation timestamp, e.g. `2021-03-04T00:00:00.000Z`
    pub created_at: String,
    /// Country name
    pub country: String,
    /// Monetary amount rounded to cents
    #[serde(serialize_with = "serialize_amount")]
    pub amount: f64,
}

/// Whole amounts serialize without a fractional part, e.g. `6657` not `6657.0`.
fn serialize_amount<S: Serializer>(amount: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    // Integers beyond 2^53 are no longer exact in f64
    if amount.fract() == 0.0 && amount.abs() < 9_007_199_254_740_992.0 {
        serializer.serialize_i64(*amount as i64)
    } else {
        serializer.serialize_f64(*amount)
    }
}

impl Row {
    /// Read the raw value of a column.
    pub fn get_value(&self, column: ColumnId) -> CellValue {
        match column {
            ColumnId::Id => CellValue::Int(self.id as i64),
            ColumnId::Name => CellValue::Text(self.name.clone()),
            ColumnId::Email => CellValue::Text(self.email.clone()),
            ColumnId::Status => CellValue::Text(self.status.as_str().to_string()),
            ColumnId::Country => CellValue::Text(self.country.clone()),
            ColumnId::CreatedAt => CellValue::Text(self.created_at.clone()),
            ColumnId::Amount => CellValue::Float(self.amount),
        }
    }

    /// Read the raw value of a column by its string key.
    ///
    /// Unknown keys yield [`CellValue::Null`].
    pub fn get_value_by_key(&self, key: &str) -> CellValue {
        ColumnId::from_key(key)
            .map(|column| self.get_value(column))
            .unwrap_or(CellValue::Null)
    }
}

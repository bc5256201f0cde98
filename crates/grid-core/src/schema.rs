//! Column definitions for the grid.
//!
//! Each column carries presentation metadata that front ends use for
//! headers and layout. The default column order is [`ColumnId::ALL`].

use crate::types::ColumnId;
use serde::{Deserialize, Serialize};

/// Horizontal alignment of a column's cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColumnAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Column definition with display metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDefinition {
    /// Column identifier
    pub id: ColumnId,

    /// Header label
    pub label: String,

    /// Cell alignment
    #[serde(default)]
    pub align: ColumnAlign,

    /// Whether the column holds numbers
    #[serde(default)]
    pub is_numeric: bool,

    /// Minimum width in pixels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_width: Option<u32>,

    /// Maximum width in pixels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_width: Option<u32>,
}

impl ColumnDefinition {
    /// Create a left-aligned, non-numeric column definition.
    pub fn new(id: ColumnId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            align: ColumnAlign::Left,
            is_numeric: false,
            min_width: None,
            max_width: None,
        }
    }

    fn numeric(mut self) -> Self {
        self.is_numeric = true;
        self
    }

    fn align(mut self, align: ColumnAlign) -> Self {
        self.align = align;
        self
    }

    fn min_width(mut self, width: u32) -> Self {
        self.min_width = Some(width);
        self
    }
}

/// Definition of a single column.
pub fn column_definition(id: ColumnId) -> ColumnDefinition {
    match id {
        ColumnId::Id => ColumnDefinition::new(id, "ID").numeric().min_width(80),
        ColumnId::Name => ColumnDefinition::new(id, "Name").min_width(160),
        ColumnId::Email => ColumnDefinition::new(id, "Email").min_width(220),
        ColumnId::Status => ColumnDefinition::new(id, "Status").min_width(110),
        ColumnId::Country => ColumnDefinition::new(id, "Country").min_width(140),
        ColumnId::CreatedAt => ColumnDefinition::new(id, "Created at").min_width(140),
        ColumnId::Amount => ColumnDefinition::new(id, "Amount")
            .numeric()
            .align(ColumnAlign::Right)
            .min_width(120),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_definition_matches_column() {
        for id in ColumnId::ALL {
            assert_eq!(column_definition(id).id, id);
        }
        assert_eq!(column_definition(ColumnId::Id).label, "ID");
        assert!(column_definition(ColumnId::Id).is_numeric);
        assert!(!column_definition(ColumnId::Email).is_numeric);
    }

    #[test]
    fn test_amount_is_numeric_and_right_aligned() {
        let amount = column_definition(ColumnId::Amount);
        assert!(amount.is_numeric);
        assert_eq!(amount.align, ColumnAlign::Right);
        assert_eq!(amount.label, "Amount");
    }

    #[test]
    fn test_column_definition_serialization() {
        let json = serde_json::to_value(column_definition(ColumnId::CreatedAt)).unwrap();
        assert_eq!(json["id"], "createdAt");
        assert_eq!(json["label"], "Created at");
        assert_eq!(json["align"], "left");
        assert_eq!(json["minWidth"], 140);
        assert!(json.get("maxWidth").is_none());
    }
}

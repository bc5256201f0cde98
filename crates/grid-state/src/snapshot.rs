//! Persisted subset of the grid state.

use crate::state::{ColumnOrder, ColumnVisibility};
use crate::view::GridView;
use serde::{Deserialize, Deserializer, Serialize};

/// Column layout, saved views and the active view id.
///
/// Every field is optional so a partial payload only overwrites what it
/// carries. `active_view_id` distinguishes an absent key (`None`) from an
/// explicit `null` (`Some(None)`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_visibility: Option<ColumnVisibility>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_order: Option<ColumnOrder>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub views: Option<Vec<GridView>>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub active_view_id: Option<Option<String>>,
}

impl GridSnapshot {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use grid_core::ColumnId;

    #[test]
    fn test_wire_keys_are_camel_case() {
        let snapshot = GridSnapshot {
            column_visibility: Some([(ColumnId::CreatedAt, false)].into_iter().collect()),
            column_order: Some(vec![ColumnId::Name, ColumnId::Id]),
            views: Some(Vec::new()),
            active_view_id: Some(None),
        };
        let value: serde_json::Value =
            serde_json::from_str(&snapshot.to_json().unwrap()).unwrap();

        assert_eq!(value["columnVisibility"]["createdAt"], false);
        assert_eq!(value["columnOrder"][0], "name");
        assert!(value["views"].as_array().unwrap().is_empty());
        assert!(value["activeViewId"].is_null());
    }

    #[test]
    fn test_absent_and_null_active_view() {
        let absent = GridSnapshot::from_json("{}").unwrap();
        assert_eq!(absent.active_view_id, None);

        let null = GridSnapshot::from_json(r#"{"activeViewId":null}"#).unwrap();
        assert_eq!(null.active_view_id, Some(None));

        let set = GridSnapshot::from_json(r#"{"activeViewId":"view_1"}"#).unwrap();
        assert_eq!(set.active_view_id, Some(Some("view_1".to_string())));
    }

    #[test]
    fn test_partial_payload() {
        let snapshot = GridSnapshot::from_json(r#"{"columnOrder":["amount","id"]}"#).unwrap();
        assert_eq!(snapshot.column_order, Some(vec![ColumnId::Amount, ColumnId::Id]));
        assert!(snapshot.column_visibility.is_none());
        assert!(snapshot.views.is_none());
    }

    #[test]
    fn test_rejects_non_object() {
        assert!(GridSnapshot::from_json("[1,2,3]").is_err());
        assert!(GridSnapshot::from_json("\"text\"").is_err());
    }
}

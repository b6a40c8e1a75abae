use serde::{Deserialize, Deserializer, Serialize};

use crate::db::enums::ItemStatus;

// Model for creating a new checklist item
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateItem {
    pub title: Option<String>,
    pub url: Option<String>,
    pub note: Option<String>,
    pub category: Option<String>,
}

// Model for updating an existing checklist item; absent fields stay untouched.
// The nullable columns use `Some(None)` for an explicit `null`, which clears them.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItem {
    pub title: Option<String>,
    pub url: Option<String>,
    #[serde(default, deserialize_with = "present_or_null")]
    pub note: Option<Option<String>>,
    #[serde(default, deserialize_with = "present_or_null")]
    pub category: Option<Option<String>>,
    pub status: Option<ItemStatus>,
    #[serde(default, deserialize_with = "present_or_null")]
    pub color: Option<Option<String>>,
}

/// Only called when the key is present, so `null` becomes `Some(None)`.
fn present_or_null<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CheckResponse {
    pub message: String,
    pub count: usize,
}

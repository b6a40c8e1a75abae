use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reachability of a monitored item as last recorded by a health check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum ItemStatus {
    #[default]
    #[sea_orm(string_value = "Unknown")]
    Unknown,
    #[sea_orm(string_value = "OK")]
    #[serde(rename = "OK")]
    Ok,
    #[sea_orm(string_value = "Error")]
    Error,
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ItemStatus::Unknown => "Unknown",
            ItemStatus::Ok => "OK",
            ItemStatus::Error => "Error",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_with_wire_names() {
        assert_eq!(serde_json::to_string(&ItemStatus::Ok).unwrap(), "\"OK\"");
        assert_eq!(serde_json::to_string(&ItemStatus::Unknown).unwrap(), "\"Unknown\"");
        assert_eq!(serde_json::to_string(&ItemStatus::Error).unwrap(), "\"Error\"");
    }

    #[test]
    fn test_status_rejects_unknown_values() {
        assert!(serde_json::from_str::<ItemStatus>("\"Pending\"").is_err());
        assert_eq!(serde_json::from_str::<ItemStatus>("\"OK\"").unwrap(), ItemStatus::Ok);
    }

    #[test]
    fn test_default_status_is_unknown() {
        assert_eq!(ItemStatus::default(), ItemStatus::Unknown);
        assert_eq!(ItemStatus::Ok.to_string(), "OK");
    }
}

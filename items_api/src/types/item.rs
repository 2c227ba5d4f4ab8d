//! Catalog item records and the draft shape used for creation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Server-assigned numeric identifier for an item.
pub type ItemID = i64;

/// A catalog item as returned by the `/items` resource.
///
/// Items are read-only on this side of the wire: there is no edit or
/// delete endpoint, so a fetched record never changes.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique numeric identifier, assigned by the server on creation.
    pub id: ItemID,

    pub name: String,

    pub description: String,

    /// Unit price. Creation-time validation requires it to be positive,
    /// but fetched records are taken as-is.
    pub price: f64,

    pub category: String,

    pub status: Status,

    /// Stamped by the client at submission time, ISO-8601.
    pub created_at: DateTime<Utc>,

    /// Equal to `created_at` for records created through this client.
    pub updated_at: DateTime<Utc>,

    /// Free-form labels. At least one is required at creation.
    pub tags: Vec<String>,

    /// Rating in `[0, 5]`.
    pub rating: f64,

    /// Units in stock, never negative.
    pub stock: i64,

    pub is_available: bool,
}

/// Lifecycle status of an item. Serialized lowercase on the wire.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Active,
    Inactive,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Status::Active => "active",
                Status::Inactive => "inactive",
            }
        )
    }
}

impl std::str::FromStr for Status {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Status::Active),
            "inactive" => Ok(Status::Inactive),
            _ => Err(()),
        }
    }
}

/// User-submitted data for a new item. The server assigns `id`, and the
/// client stamps `createdAt`/`updatedAt` when posting.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ItemDraft {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub status: Status,
    pub tags: Vec<String>,
    pub rating: f64,
    pub stock: i64,
    pub is_available: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_roundtrip() {
        assert_eq!(serde_json::to_string(&Status::Active).unwrap(), "\"active\"");
        assert_eq!(
            serde_json::from_str::<Status>("\"inactive\"").unwrap(),
            Status::Inactive
        );
    }

    #[test]
    fn status_from_str() {
        assert_eq!("active".parse::<Status>().unwrap(), Status::Active);
        assert_eq!("inactive".parse::<Status>().unwrap(), Status::Inactive);
        assert!("enabled".parse::<Status>().is_err());
    }

    #[test]
    fn draft_serializes_camel_case() {
        let draft = ItemDraft {
            name: "Widget".to_string(),
            description: "A widget".to_string(),
            price: 9.99,
            category: "tools".to_string(),
            status: Status::Active,
            tags: vec!["new".to_string()],
            rating: 4.0,
            stock: 3,
            is_available: true,
        };
        let val = serde_json::to_value(&draft).unwrap();
        assert!(val.get("isAvailable").is_some());
        assert!(val.get("is_available").is_none());
    }
}

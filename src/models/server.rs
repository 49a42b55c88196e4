use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::jsonapi::{Relationship, TypedResource};

/// A game server tracked by BattleMetrics.
#[derive(Debug, Clone)]
pub struct Server {
    /// Resource identifier.
    pub id: String,
    /// Typed attribute schema.
    pub attributes: ServerAttributes,
    /// References to related resources (`game`, `organization`,
    /// `serverGroup`, ...).
    pub relationships: HashMap<String, Relationship>,
}

impl TypedResource for Server {
    const TYPE: &'static str = "server";
    type Attributes = ServerAttributes;

    fn from_resource(
        id: String,
        attributes: Self::Attributes,
        relationships: HashMap<String, Relationship>,
    ) -> Self {
        Self {
            id,
            attributes,
            relationships,
        }
    }
}

/// Attributes of a [`Server`] resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerAttributes {
    /// Display name.
    pub name: String,

    /// Join address, when the game exposes one.
    #[serde(default)]
    pub address: Option<String>,

    /// Query IP.
    pub ip: String,

    /// Game port.
    pub port: u16,

    /// Query port.
    #[serde(default)]
    pub port_query: Option<u16>,

    /// Current player count.
    pub players: u32,

    /// Player capacity.
    pub max_players: u32,

    /// Global rank; absent for unranked servers.
    #[serde(default)]
    pub rank: Option<u32>,

    /// `[longitude, latitude]` pair.
    #[serde(default)]
    pub location: Vec<f64>,

    /// ISO country code.
    pub country: String,

    /// `online`, `offline`, or `dead`.
    pub status: String,

    /// Game-specific details blob (map, settings, tags, ...).
    #[serde(default)]
    pub details: Option<Value>,

    /// Whether the server is hidden from search.
    #[serde(default)]
    pub private: bool,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,

    /// Fields this crate does not model, preserved as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_server_attributes() {
        let attributes: ServerAttributes = serde_json::from_value(json!({
            "name": "Rustafied - Main",
            "address": null,
            "ip": "199.231.233.68",
            "port": 28015,
            "portQuery": 28017,
            "players": 180,
            "maxPlayers": 200,
            "rank": 3,
            "location": [-96.8705, 32.8137],
            "country": "US",
            "status": "online",
            "details": {"map": "Procedural Map", "rust_type": "official"},
            "private": false,
            "createdAt": "2016-01-07T22:45:42.164Z",
            "updatedAt": "2024-06-01T08:30:00.000Z",
            "queryStatus": "valid"
        }))
        .unwrap();

        assert_eq!(attributes.name, "Rustafied - Main");
        assert_eq!(attributes.port_query, Some(28017));
        assert_eq!(attributes.players, 180);
        assert_eq!(attributes.max_players, 200);
        assert_eq!(attributes.created_at.unwrap().timestamp(), 1_452_206_742);

        // Unmodeled fields survive in `extra`.
        assert_eq!(attributes.extra["queryStatus"], "valid");
    }

    #[test]
    fn test_optional_fields_default() {
        let attributes: ServerAttributes = serde_json::from_value(json!({
            "name": "bare",
            "ip": "127.0.0.1",
            "port": 27015,
            "players": 0,
            "maxPlayers": 16,
            "country": "DE",
            "status": "offline"
        }))
        .unwrap();

        assert!(attributes.rank.is_none());
        assert!(attributes.location.is_empty());
        assert!(!attributes.private);
        assert!(attributes.created_at.is_none());
    }
}

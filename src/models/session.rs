use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::jsonapi::{Relationship, TypedResource};

/// One play session of a player on a server.
#[derive(Debug, Clone)]
pub struct Session {
    /// Resource identifier.
    pub id: String,
    /// Typed attribute schema.
    pub attributes: SessionAttributes,
    /// References to related resources (`player`, `server`, `identifiers`).
    pub relationships: HashMap<String, Relationship>,
}

impl TypedResource for Session {
    const TYPE: &'static str = "session";
    type Attributes = SessionAttributes;

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

/// Attributes of a [`Session`] resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionAttributes {
    /// When the player joined.
    pub start: DateTime<Utc>,

    /// When the player left; `None` while the session is live.
    #[serde(default)]
    pub stop: Option<DateTime<Utc>>,

    /// Whether this was the player's first session on the server.
    #[serde(default)]
    pub first_time: bool,

    /// Player name used during the session.
    pub name: String,

    #[serde(default)]
    pub private: bool,

    #[serde(default)]
    pub metadata: Option<Vec<SessionMetadata>>,

    /// Fields this crate does not model, preserved as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One metadata entry attached to a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionMetadata {
    /// Metadata key.
    pub key: String,

    #[serde(default)]
    pub private: bool,

    #[serde(default)]
    pub value: Option<String>,
}

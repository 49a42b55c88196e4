use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::jsonapi::{Relationship, TypedResource};

/// A player profile tracked across servers.
#[derive(Debug, Clone)]
pub struct Player {
    /// Resource identifier.
    pub id: String,
    /// Typed attribute schema.
    pub attributes: PlayerAttributes,
    /// References to related resources (`servers`, `organizations`, ...).
    pub relationships: HashMap<String, Relationship>,
}

impl TypedResource for Player {
    const TYPE: &'static str = "player";
    type Attributes = PlayerAttributes;

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

/// Attributes of a [`Player`] resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerAttributes {
    /// Most recently seen name.
    pub name: String,

    /// Whether the profile is private.
    #[serde(default)]
    pub private: bool,

    /// Whether an identifier positively matched this profile.
    #[serde(default)]
    pub positive_match: bool,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,

    /// Fields this crate does not model, preserved as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

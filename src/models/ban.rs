use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::jsonapi::{Relationship, TypedResource};

/// A ban issued against a player on a ban list.
#[derive(Debug, Clone)]
pub struct Ban {
    /// Resource identifier.
    pub id: String,
    /// Typed attribute schema.
    pub attributes: BanAttributes,
    /// References to related resources (`player`, `server`, `banList`, ...).
    pub relationships: HashMap<String, Relationship>,
}

impl TypedResource for Ban {
    const TYPE: &'static str = "ban";
    type Attributes = BanAttributes;

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

/// Attributes of a [`Ban`] resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BanAttributes {
    /// Reason shown to the banned player.
    pub reason: String,

    /// Private staff note.
    #[serde(default)]
    pub note: Option<String>,

    /// Expiry; `None` for permanent bans.
    #[serde(default)]
    pub expires: Option<DateTime<Utc>>,

    /// Player identifiers the ban matches (strings or structured objects).
    #[serde(default)]
    pub identifiers: Vec<Value>,

    /// Whether the ban applies across the whole organization.
    #[serde(default)]
    pub org_wide: bool,

    /// Whether new matching identifiers are banned automatically.
    #[serde(default)]
    pub auto_add_enabled: bool,

    /// Whether the ban is mirrored to the game's native ban system.
    #[serde(default)]
    pub native_enabled: Option<bool>,

    /// When the ban was issued.
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,

    /// Stable unique id of the ban within its ban list.
    #[serde(default)]
    pub uid: Option<String>,

    /// Fields this crate does not model, preserved as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::jsonapi::{Relationship, TypedResource};

/// A staff note attached to a player.
#[derive(Debug, Clone)]
pub struct Note {
    /// Resource identifier.
    pub id: String,
    /// Typed attribute schema.
    pub attributes: NoteAttributes,
    /// References to related resources (`player`, `organization`, `user`).
    pub relationships: HashMap<String, Relationship>,
}

impl TypedResource for Note {
    const TYPE: &'static str = "playerNote";
    type Attributes = NoteAttributes;

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

/// Attributes of a [`Note`] resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteAttributes {
    /// Note body (HTML).
    pub note: String,

    /// Whether the note is shared with friendly organizations.
    #[serde(default)]
    pub shared: bool,

    /// Minimum clearance level required to read the note.
    #[serde(default)]
    pub clearance_level: Option<i64>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,

    /// Fields this crate does not model, preserved as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Fields accepted when updating a note; only set fields are sent.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteUpdate {
    /// New note body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    /// New shared flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared: Option<bool>,

    /// New clearance level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clearance_level: Option<i64>,
}

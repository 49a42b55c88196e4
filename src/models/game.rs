use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::jsonapi::{Relationship, TypedResource};

/// A game known to BattleMetrics (identified by a slug such as `"rust"`).
#[derive(Debug, Clone)]
pub struct Game {
    /// Resource identifier (game slug).
    pub id: String,
    /// Typed attribute schema.
    pub attributes: GameAttributes,
    /// References to related resources.
    pub relationships: HashMap<String, Relationship>,
}

impl TypedResource for Game {
    const TYPE: &'static str = "game";
    type Attributes = GameAttributes;

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

/// Attributes of a [`Game`] resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameAttributes {
    /// Display name.
    pub name: String,

    /// Players currently online across all tracked servers.
    #[serde(default)]
    pub players: u64,

    /// Tracked server count.
    #[serde(default)]
    pub servers: u64,

    #[serde(default)]
    pub players_by_country: HashMap<String, u64>,

    #[serde(default)]
    pub servers_by_country: HashMap<String, u64>,

    #[serde(default, rename = "maxPlayers24H")]
    pub max_players_24h: Option<f64>,

    #[serde(default, rename = "maxPlayers7D")]
    pub max_players_7d: Option<f64>,

    #[serde(default, rename = "maxPlayers30D")]
    pub max_players_30d: Option<f64>,

    #[serde(default, rename = "minPlayers24H")]
    pub min_players_24h: Option<f64>,

    #[serde(default, rename = "minPlayers7D")]
    pub min_players_7d: Option<f64>,

    #[serde(default, rename = "minPlayers30D")]
    pub min_players_30d: Option<f64>,

    /// Steam metadata.
    #[serde(default)]
    pub metadata: Option<GameMetadata>,

    /// Fields this crate does not model, preserved as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Steam metadata for a game.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameMetadata {
    /// Steam app id.
    #[serde(default)]
    pub appid: Option<f64>,

    /// Steam game directory.
    #[serde(default)]
    pub gamedir: Option<String>,

    /// Whether the game exposes no player list.
    #[serde(default)]
    pub no_player_list: Option<bool>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

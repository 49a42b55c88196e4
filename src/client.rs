//! The high-level BattleMetrics client.

use std::sync::Arc;

use serde_json::json;

use crate::config::{ClientConfig, ConfigError};
use crate::error::Error;
use crate::filters::{BanFilter, PlayerFilter, ServerFilter, SessionFilter};
use crate::http::route::Route;
use crate::http::transport::Transport;
use crate::models::{Ban, Game, Note, NoteUpdate, Organization, Player, Server, Session};
use crate::pagination::Paginator;

/// The main client for the BattleMetrics API.
///
/// One client owns one HTTP connection pool and one rate budget; clones
/// share both, so concurrent calls stay within the same request budget.
///
/// # Example
/// ```no_run
/// use battlemetrics::Battlemetrics;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = Battlemetrics::new("my-token")?;
/// let server = client.get_server(1234567).await?;
/// println!(
///     "{}: {}/{} players",
///     server.attributes.name, server.attributes.players, server.attributes.max_players
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Battlemetrics {
    transport: Arc<Transport>,
}

impl Battlemetrics {
    /// Create a client with the given API token and default configuration.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ConfigError> {
        Self::with_config(ClientConfig::new(api_key))
    }

    /// Create a client with custom configuration.
    pub fn with_config(config: ClientConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            transport: Arc::new(Transport::new(&config)?),
        })
    }

    /// Create a client from the `BATTLEMETRICS_API_KEY` environment
    /// variable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::with_config(ClientConfig::from_env()?)
    }

    // ---- servers ----

    /// Fetch one server by id.
    pub async fn get_server(&self, server_id: i64) -> Result<Server, Error> {
        self.transport
            .request_document(Route::get(format!("/servers/{server_id}")), None)
            .await?
            .decode_single()
    }

    /// List servers matching the filter, one page at a time.
    pub fn list_servers(&self, filter: &ServerFilter) -> Paginator<Server> {
        let route = Route::get("/servers").queries(filter.query_pairs());
        Paginator::new(Arc::clone(&self.transport), route)
    }

    /// Play sessions recorded on a server, most recent first.
    pub fn server_session_history(
        &self,
        server_id: i64,
        filter: &SessionFilter,
    ) -> Paginator<Session> {
        let route = Route::get(format!("/servers/{server_id}/relationships/sessions"))
            .queries(filter.query_pairs());
        Paginator::new(Arc::clone(&self.transport), route)
    }

    /// Queue the server for an immediate query and update.
    ///
    /// Upstream limits this to once every 29 seconds per server.
    pub async fn server_force_update(&self, server_id: i64) -> Result<(), Error> {
        self.transport
            .request_empty(Route::post(format!("/servers/{server_id}/force-update")), None)
            .await
    }

    // ---- players ----

    /// Fetch one player by id.
    pub async fn get_player(&self, player_id: i64) -> Result<Player, Error> {
        self.transport
            .request_document(Route::get(format!("/players/{player_id}")), None)
            .await?
            .decode_single()
    }

    /// List players matching the filter, one page at a time.
    pub fn list_players(&self, filter: &PlayerFilter) -> Paginator<Player> {
        let route = Route::get("/players").queries(filter.query_pairs());
        Paginator::new(Arc::clone(&self.transport), route)
    }

    /// Play sessions of one player, most recent first.
    pub fn player_session_history(&self, player_id: i64) -> Paginator<Session> {
        let route = Route::get(format!("/players/{player_id}/relationships/sessions"));
        Paginator::new(Arc::clone(&self.transport), route)
    }

    // ---- bans ----

    /// Fetch one ban by id.
    pub async fn get_ban(&self, ban_id: i64) -> Result<Ban, Error> {
        self.transport
            .request_document(Route::get(format!("/bans/{ban_id}")), None)
            .await?
            .decode_single()
    }

    /// List bans visible to the token, one page at a time.
    pub fn list_bans(&self, filter: &BanFilter) -> Paginator<Ban> {
        let route = Route::get("/bans").queries(filter.query_pairs());
        Paginator::new(Arc::clone(&self.transport), route)
    }

    // ---- organizations ----

    /// Fetch one organization by id.
    pub async fn get_organization(&self, organization_id: i64) -> Result<Organization, Error> {
        self.transport
            .request_document(Route::get(format!("/organizations/{organization_id}")), None)
            .await?
            .decode_single()
    }

    /// List organizations visible to the token, one page at a time.
    pub fn list_organizations(&self) -> Paginator<Organization> {
        Paginator::new(Arc::clone(&self.transport), Route::get("/organizations"))
    }

    // ---- games ----

    /// Fetch one game by slug, e.g. `"rust"`.
    pub async fn get_game(&self, game_id: &str) -> Result<Game, Error> {
        self.transport
            .request_document(Route::get(format!("/games/{game_id}")), None)
            .await?
            .decode_single()
    }

    /// List all games BattleMetrics tracks, one page at a time.
    pub fn list_games(&self) -> Paginator<Game> {
        Paginator::new(Arc::clone(&self.transport), Route::get("/games"))
    }

    // ---- notes ----

    /// Fetch one note attached to a player.
    pub async fn get_note(&self, player_id: i64, note_id: i64) -> Result<Note, Error> {
        self.transport
            .request_document(
                Route::get(format!("/players/{player_id}/relationships/notes/{note_id}")),
                None,
            )
            .await?
            .decode_single()
    }

    /// Update a note; only the fields set on `update` are sent.
    pub async fn update_note(
        &self,
        player_id: i64,
        note_id: i64,
        update: &NoteUpdate,
    ) -> Result<Note, Error> {
        let body = json!({
            "data": {
                "type": "playerNote",
                "id": note_id.to_string(),
                "attributes": update,
            }
        });
        self.transport
            .request_document(
                Route::patch(format!("/players/{player_id}/relationships/notes/{note_id}")),
                Some(body),
            )
            .await?
            .decode_single()
    }

    /// Delete a note.
    pub async fn delete_note(&self, player_id: i64, note_id: i64) -> Result<(), Error> {
        self.transport
            .request_empty(
                Route::delete(format!("/players/{player_id}/relationships/notes/{note_id}")),
                None,
            )
            .await
    }

    /// Release the client.
    ///
    /// Connections are pooled and closed when the last clone is dropped;
    /// this exists for call sites that want the release to be explicit.
    pub fn close(self) {}
}

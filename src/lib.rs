//! Async client for the [BattleMetrics](https://www.battlemetrics.com) API.
//!
//! BattleMetrics exposes game-server statistics, player tracking, and ban
//! management as a JSON:API service. This crate wraps it with typed
//! request parameters, typed response models, header-driven rate limiting,
//! and cursor pagination.
//!
//! # Architecture
//!
//! - **Client** ([`Battlemetrics`]): high-level methods (`get_server`,
//!   `list_players`, ...) returning typed models.
//! - **Transport** (internal): pooled `reqwest` client injecting the
//!   bearer token; shared by all clones of a client.
//! - **Rate limiting** (internal): a request budget fed from response
//!   headers; exhaustion suspends callers until the reset, and a 429 is
//!   retried exactly once after `Retry-After`.
//! - **JSON:API layer** ([`jsonapi`]): document envelope validation and
//!   typed resource decoding keyed on the `type` discriminator.
//! - **Pagination** ([`Paginator`]): forward-only cursor iteration over
//!   `links.next`, with a `Stream` adapter for per-item consumption.
//! - **Errors** ([`Error`]): a typed taxonomy distinguishing network,
//!   auth, validation, not-found, rate-limit, server, and
//!   malformed-response failures.
//!
//! # Example
//!
//! ```no_run
//! use battlemetrics::{Battlemetrics, ServerFilter};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Battlemetrics::from_env()?;
//!
//!     let filter = ServerFilter {
//!         game: Some("rust".to_string()),
//!         page_size: Some(10),
//!         ..ServerFilter::default()
//!     };
//!
//!     let mut pages = client.list_servers(&filter);
//!     while let Some(servers) = pages.next_page().await? {
//!         for server in servers {
//!             println!("{} ({} players)", server.attributes.name, server.attributes.players);
//!         }
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod filters;
mod http;
pub mod jsonapi;
pub mod models;
pub mod pagination;

// Re-export commonly used types for convenience
pub use client::Battlemetrics;
pub use config::{ClientConfig, ConfigError};
pub use error::{ApiError, Error};
pub use filters::{BanFilter, PlayerFilter, ServerFilter, SessionFilter};
pub use jsonapi::{
    Document, Links, Relationship, RelationshipData, Resource, ResourceRef, TypedResource,
};
pub use models::{
    Ban, BanAttributes, Game, GameAttributes, GameMetadata, Note, NoteAttributes, NoteUpdate,
    Organization, OrganizationAttributes, Player, PlayerAttributes, Server, ServerAttributes,
    Session, SessionAttributes, SessionMetadata,
};
pub use pagination::Paginator;

//! Search for players and view their session history.
//!
//! Usage: `BATTLEMETRICS_API_KEY=... cargo run --example player_search`

use battlemetrics::{Battlemetrics, PlayerFilter};
use futures::{StreamExt, TryStreamExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let client = Battlemetrics::from_env()?;

    let filter = PlayerFilter {
        search: Some("shroud".to_string()),
        page_size: Some(5),
        ..PlayerFilter::default()
    };

    let mut pages = client.list_players(&filter);
    let players = pages.next_page().await?.unwrap_or_default();
    for player in &players {
        println!("{} (ID: {})", player.attributes.name, player.id);
    }

    // Session history for the first hit.
    if let Some(player) = players.first() {
        let sessions = client
            .player_session_history(player.id.parse()?)
            .items()
            .take(5);
        futures::pin_mut!(sessions);

        while let Some(session) = sessions.try_next().await? {
            println!(
                "  {} - {}",
                session.attributes.start,
                session
                    .attributes
                    .stop
                    .map_or_else(|| "still online".to_string(), |stop| stop.to_string())
            );
        }
    }

    Ok(())
}

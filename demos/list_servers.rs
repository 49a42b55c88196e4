//! Search for game servers with filters.
//!
//! Usage: `BATTLEMETRICS_API_KEY=... cargo run --example list_servers`

use battlemetrics::{Battlemetrics, ServerFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let client = Battlemetrics::from_env()?;

    let filter = ServerFilter {
        game: Some("rust".to_string()),
        countries: vec!["US".to_string()],
        page_size: Some(10),
        ..ServerFilter::default()
    };

    let mut pages = client.list_servers(&filter);
    if let Some(servers) = pages.next_page().await? {
        for server in servers {
            println!(
                "{} - {} players",
                server.attributes.name, server.attributes.players
            );
        }
    }

    Ok(())
}

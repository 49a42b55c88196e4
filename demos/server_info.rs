//! Fetch and display basic server information.
//!
//! Usage: `BATTLEMETRICS_API_KEY=... cargo run --example server_info`

use battlemetrics::Battlemetrics;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let client = Battlemetrics::from_env()?;
    let server = client.get_server(1234567).await?;

    println!("Server: {}", server.attributes.name);
    println!(
        "Players: {}/{}",
        server.attributes.players, server.attributes.max_players
    );
    println!("Status: {}", server.attributes.status);

    client.close();
    Ok(())
}

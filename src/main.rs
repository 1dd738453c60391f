use tracing_subscriber::EnvFilter;

use casedesk_api::config;
use casedesk_api::server::{app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up KLEOPATRA_API_KEY, TEAM_ROSTER_URL, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("casedesk_api=info,tower_http=info")),
        )
        .init();

    let config = config::config().clone();
    tracing::info!("Starting CaseDesk API in {:?} mode", config.environment);

    let port = config.server.port;
    let state = AppState::from_config(config)?;

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| anyhow::anyhow!("failed to bind {}: {}", bind_addr, e))?;

    tracing::info!("CaseDesk API listening on http://{}", bind_addr);

    axum::serve(listener, app(state)).await?;
    Ok(())
}

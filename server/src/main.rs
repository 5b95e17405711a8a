mod config;
mod routes;

use tracing_subscriber::EnvFilter;

use crate::config::{HostConfig, HostError};

#[tokio::main]
async fn main() -> Result<(), HostError> {
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    if let Ok(path) = dotenv {
        tracing::info!(path = %path.display(), "loaded .env");
    }

    let config = HostConfig::from_env()?;
    tracing::info!(
        api_url = %config.client.api_url,
        env = ?config.client.env,
        payments = config.client.payments_enabled(),
        "client configuration"
    );

    let app = routes::app(&config)?;
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(%addr, "devmarket listening");
    axum::serve(listener, app).await?;
    Ok(())
}

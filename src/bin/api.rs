use std::sync::Arc;

use roadmap_relay::api::AppState;
use roadmap_relay::core::config::AppConfig;
use roadmap_relay::server::{RelayServer, ServerConfig};
use tracing::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; the real environment still applies.
    dotenv::dotenv().ok();
    roadmap_relay::setup_logging();

    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        anyhow::Error::msg(e)
    })?;

    info!(
        "API Key status: {}",
        if config.api_key_present() { "Present" } else { "Missing" }
    );
    info!("API Key prefix: {}", config.api_key_prefix());

    let state = Arc::new(AppState::new(config)?);
    RelayServer::new(ServerConfig::default(), state).run().await
}

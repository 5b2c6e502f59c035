/// Roadmap relay - an HTTP service that turns a topic into a learning roadmap using ChatGPT.
///
/// The crate exposes two routes:
/// 1. `GET /test` reports that the service is up and whether an API key is configured
/// 2. `POST /v1` takes `{"topic": ...}`, asks the completion API for a roadmap and
///    returns the model's JSON output unchanged
///
/// # Architecture
///
/// The system uses:
/// - axum and tower-http for the inbound HTTP surface
/// - reqwest for the outbound chat-completion call
/// - openai-api-rs message types for building the prompt
/// - Tokio for async runtime
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use roadmap_relay::api::handler::AppState;
/// use roadmap_relay::core::config::AppConfig;
/// use roadmap_relay::server::{RelayServer, ServerConfig};
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() -> anyhow::Result<()> {
///     roadmap_relay::setup_logging();
///
///     let config = AppConfig::new(Some("sk-dummy".to_string())).map_err(anyhow::Error::msg)?;
///     let state = Arc::new(AppState::new(config)?);
///
///     RelayServer::new(ServerConfig::default(), state).run().await
/// }
/// ```
// Module declarations
pub mod api;
pub mod clients;
pub mod core;
pub mod errors;
pub mod features;
pub mod prompt;
pub mod server;

pub use errors::RelayError;

/// Configure structured logging with JSON format.
///
/// The filter comes from `RUST_LOG` and defaults to `info`. Call once at the start
/// of the process.
///
/// # Example
///
/// ```
/// roadmap_relay::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

//! HTTP handlers and router for the relay.
//!
//! This module handles:
//! - The health probe (`GET /test`)
//! - Roadmap generation (`POST /v1`, delegated to `features::roadmap`)
//! - Cross-origin access, request tracing and panic recovery

use std::any::Any;
use std::sync::Arc;

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::Value;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{Instrument, error, info, info_span};
use uuid::Uuid;

use super::helpers::{err_response, ok_json};
use crate::clients::LlmClient;
use crate::core::config::AppConfig;
use crate::core::models::{HealthResponse, RoadmapRequest};
use crate::errors::RelayError;
use crate::features::roadmap::generate_roadmap;

pub const HEALTH_MESSAGE: &str = "Backend is working!";

/// Read-only state shared by every request.
pub struct AppState {
    pub config: AppConfig,
    pub llm: LlmClient,
}

impl AppState {
    /// # Errors
    ///
    /// Returns an error if the outbound HTTP client cannot be built.
    pub fn new(config: AppConfig) -> Result<Self, RelayError> {
        let llm = LlmClient::from_config(&config)?;
        Ok(Self { config, llm })
    }
}

/// Builds the application router. Any origin may call it.
pub fn create_router(state: Arc<AppState>) -> Router {
    with_layers(
        Router::new()
            .route("/test", get(health_handler))
            .route("/v1", post(roadmap_handler))
            .with_state(state),
    )
}

fn with_layers(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

// ============================================================================
// Health Probe
// ============================================================================

async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        message: HEALTH_MESSAGE.to_string(),
        api_key_present: state.config.api_key_present(),
        api_key_prefix: state.config.api_key_prefix(),
    })
}

// ============================================================================
// Roadmap Generation
// ============================================================================

async fn roadmap_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response {
    let request_id = Uuid::new_v4();
    let span = info_span!("roadmap", %request_id);

    async move {
        if !state.llm.has_api_key() {
            error!("OpenAI API key is not configured");
            return RelayError::ConfigurationMissing.into_response();
        }

        let body = match payload {
            Ok(Json(body)) => body,
            // No JSON content type: read as an empty body, topic stays undefined
            Err(JsonRejection::MissingJsonContentType(_)) => Value::Null,
            Err(rejection) => {
                error!(error = %rejection, "Rejected request body");
                return err_response(
                    StatusCode::BAD_REQUEST,
                    "Invalid request body",
                    Some(rejection.body_text().as_str()),
                );
            }
        };

        let request = RoadmapRequest::from_body(&body);
        info!(topic = %request.topic, "Received request for topic");

        match generate_roadmap(&state.llm, &request.topic).await {
            Ok(roadmap) => ok_json(roadmap),
            Err(e) => {
                error!(error = %e, "Roadmap generation failed");
                e.into_response()
            }
        }
    }
    .instrument(span)
    .await
}

// ============================================================================
// Panic Recovery
// ============================================================================

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "Unknown panic".to_string()
    };

    error!(details = %details, "Server Error");
    RelayError::InternalFault(details).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use serde_json::json;
    use tower::ServiceExt;

    async fn exploding_handler() -> &'static str {
        panic!("boom");
    }

    #[tokio::test]
    async fn test_panicking_route_returns_internal_error_body() {
        let app = with_layers(Router::new().route("/explode", get(exploding_handler)));

        let response = app
            .oneshot(Request::builder().uri("/explode").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({"error": "Internal server error", "details": "boom"}));
    }

    #[test]
    fn test_panic_payload_string() {
        let response = handle_panic(Box::new("boom".to_string()));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_panic_payload_str() {
        let response = handle_panic(Box::new("static boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_panic_payload_unknown() {
        let response = handle_panic(Box::new(42_u8));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

//! Root HTTP Routes
//!
//! Greeting and health check endpoints.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;

use super::state::ItemsState;

/// Greeting returned by `GET /`
pub const GREETING: &str = "Hello from the items service";

/// Greeting response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub items: usize,
}

/// Create root routes
pub fn root_routes(state: Arc<ItemsState>) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

async fn root_handler() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: GREETING.to_string(),
    })
}

/// Health check handler
async fn health_handler(State(state): State<Arc<ItemsState>>) -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        items: state.store.len(),
    };

    (StatusCode::OK, Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response_serialization() {
        let response = HealthResponse {
            status: "ok".to_string(),
            version: "0.1.0".to_string(),
            items: 2,
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["items"], 2);
    }

    #[test]
    fn test_greeting_serialization() {
        let json = serde_json::to_string(&MessageResponse {
            message: GREETING.to_string(),
        })
        .unwrap();
        assert_eq!(json, r#"{"message":"Hello from the items service"}"#);
    }
}

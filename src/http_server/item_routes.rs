//! Item HTTP Routes
//!
//! Endpoints for creating and reading items.
//!
//! Bodies are read as raw bytes and decoded here rather than through
//! `Json<T>`, so content-type, syntax and field errors all surface as
//! the same 422 validation response.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path, State},
    routing::{get, post},
    Json, Router,
};
use serde_json::Value;

use super::errors::{ApiError, ApiResult};
use super::state::ItemsState;
use crate::item::{ItemId, StoredItem};
use crate::observability::Event;
use crate::schema::{SchemaValidator, ValidationError, ValidationErrors};

// ==================
// Item Routes
// ==================

/// Create item routes
pub fn item_routes(state: Arc<ItemsState>) -> Router {
    Router::new()
        .route("/items/", post(create_item_handler))
        .route("/items", post(create_item_handler))
        .route("/items/:item_id", get(get_item_handler))
        .with_state(state)
}

// ==================
// Helper Functions
// ==================

fn decode_body(body: &Bytes) -> Result<Value, ValidationErrors> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(ValidationError::missing(vec!["body".to_string()]).into());
    }
    serde_json::from_slice(body).map_err(|e| ValidationError::json_decode(e.to_string()).into())
}

/// Outcome of reading the `item_id` path segment
#[derive(Debug, PartialEq, Eq)]
enum PathId {
    /// Fits an [`ItemId`]
    Id(ItemId),
    /// An integer outside the [`ItemId`] range; no item can carry it
    OutOfRange,
}

fn parse_item_id(raw: &str) -> Result<PathId, ValidationErrors> {
    if let Ok(id) = raw.parse::<ItemId>() {
        return Ok(PathId::Id(id));
    }

    let digits = raw.strip_prefix(['-', '+']).unwrap_or(raw);
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        return Ok(PathId::OutOfRange);
    }

    Err(invalid_item_id())
}

fn invalid_item_id() -> ValidationErrors {
    ValidationError::integer_type(vec!["path".to_string(), "item_id".to_string()]).into()
}

fn rejected(errors: ValidationErrors) -> ApiError {
    tracing::warn!(
        event = %Event::ValidationRejected,
        count = errors.len(),
        errors = %errors,
        "request rejected"
    );
    ApiError::Validation(errors)
}

// ==================
// Item Handlers
// ==================

async fn create_item_handler(
    State(state): State<Arc<ItemsState>>,
    body: Bytes,
) -> ApiResult<Json<StoredItem>> {
    let item = decode_body(&body)
        .and_then(|value| SchemaValidator::validate_item(&value))
        .map_err(rejected)?;

    let stored = state.store.create(item);
    tracing::info!(
        event = %Event::ItemCreated,
        id = stored.id,
        name = %stored.name,
        "item created"
    );

    Ok(Json(stored))
}

async fn get_item_handler(
    State(state): State<Arc<ItemsState>>,
    raw_id: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<StoredItem>> {
    let raw_id = match raw_id {
        Ok(Path(raw_id)) => raw_id,
        Err(_) => return Err(rejected(invalid_item_id())),
    };

    let item_id = match parse_item_id(&raw_id).map_err(rejected)? {
        PathId::Id(item_id) => item_id,
        PathId::OutOfRange => {
            tracing::warn!(event = %Event::ItemNotFound, id = %raw_id);
            return Err(ApiError::item_not_found());
        }
    };

    match state.store.get(item_id) {
        Ok(stored) => {
            tracing::debug!(event = %Event::ItemFetched, id = item_id);
            Ok(Json(stored))
        }
        Err(err) => {
            tracing::warn!(event = %Event::ItemNotFound, id = item_id, code = err.code());
            Err(err.into())
        }
    }
}

//! # HTTP API Errors
//!
//! Error types for the HTTP layer. Every error renders as a JSON body
//! with a single `detail` member: a message for lookups and routing,
//! or the list of field errors for validation failures.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::item::StoreError;
use crate::schema::ValidationErrors;

/// Result type for handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// HTTP API errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Resource not found
    #[error("{0}")]
    NotFound(String),

    /// Path exists but not for this method
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    /// Request failed schema validation
    #[error("{0}")]
    Validation(#[from] ValidationErrors),
}

impl ApiError {
    /// Item lookup miss
    pub fn item_not_found() -> Self {
        ApiError::NotFound("Item not found".to_string())
    }

    /// Unknown route
    pub fn route_not_found() -> Self {
        ApiError::NotFound("Not Found".to_string())
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => ApiError::item_not_found(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match self {
            ApiError::NotFound(detail) => json!({ "detail": detail }),
            ApiError::MethodNotAllowed => json!({ "detail": "Method Not Allowed" }),
            ApiError::Validation(errors) => json!({ "detail": errors }),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ValidationError;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::item_not_found().status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::from(ValidationErrors::new()).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn test_method_not_allowed_status() {
        let response = ApiError::MethodNotAllowed.into_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[test]
    fn test_store_error_conversion() {
        let err = ApiError::from(StoreError::NotFound(3));
        assert_eq!(err.to_string(), "Item not found");
    }

    #[test]
    fn test_validation_response_status() {
        let errors = ValidationErrors::from(ValidationError::missing(vec![
            "body".to_string(),
            "name".to_string(),
        ]));
        let response = ApiError::from(errors).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}

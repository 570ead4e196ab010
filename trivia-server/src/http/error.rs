//! API error types with IntoResponse
//!
//! Every error renders as `{"success": false, "error": <status>, "message": ...}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Resource missing or result set empty (404)
    NotFound { message: String },

    /// Client sent well-formed JSON with invalid values (422)
    Validation(ValidationError),

    /// Request body could not be decoded (422)
    MalformedBody { reason: String },

    /// Store failed while creating or listing (422, logged)
    Persistence(DbError),

    /// Unexpected database error (500, logged)
    Database(DbError),
}

impl ApiError {
    /// A single resource that doesn't exist.
    pub fn not_found(resource: &str, id: impl std::fmt::Display) -> Self {
        Self::NotFound {
            message: format!("{} '{}' not found", resource, id),
        }
    }

    /// A list, filter or page with nothing in it.
    pub fn no_results(what: &str) -> Self {
        Self::NotFound {
            message: format!("no {} found", what),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Validation(_) | Self::MalformedBody { .. } | Self::Persistence(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            Self::NotFound { message } => message.clone(),
            Self::Validation(e) => {
                tracing::debug!("Validation failed: {}", e);
                format!("unprocessable: {}", e)
            }
            Self::MalformedBody { reason } => {
                tracing::debug!("Malformed request body: {}", reason);
                format!("unprocessable: {}", reason)
            }
            Self::Persistence(e) => {
                // Log the actual error, return generic message
                tracing::error!("Persistence error: {}", e);
                "unprocessable".to_string()
            }
            Self::Database(e) => {
                tracing::error!("Database error: {}", e);
                "internal server error".to_string()
            }
        };

        let body = json!({
            "success": false,
            "error": status.as_u16(),
            "message": message
        });

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, id } => Self::not_found(resource, id),
            _ => Self::Database(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn not_found_is_404() {
        let response = ApiError::not_found("question", 9).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], 404);
        assert_eq!(body["message"], "question '9' not found");
    }

    #[tokio::test]
    async fn validation_error_is_422() {
        let err = ApiError::Validation(ValidationError::Empty { field: "searchTerm" });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = body_json(response).await;
        assert_eq!(body["error"], 422);
    }

    #[tokio::test]
    async fn persistence_error_is_422_with_generic_message() {
        let err = ApiError::Persistence(DbError::Unavailable("connection refused".into()));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = body_json(response).await;
        assert_eq!(body["message"], "unprocessable");
    }

    #[tokio::test]
    async fn unexpected_db_error_is_500() {
        let err: ApiError = DbError::Unavailable("gone".into()).into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], 500);
    }

    #[test]
    fn db_not_found_maps_to_404() {
        let err: ApiError = DbError::NotFound {
            resource: "question",
            id: "3".into(),
        }
        .into();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }
}

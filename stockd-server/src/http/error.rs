//! API error types with IntoResponse
//!
//! Every failure kind becomes a JSON response with its own status code;
//! nothing here aborts the process.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Request body failed to decode (400)
    Decode { detail: String },

    /// Path identifier failed to parse (400)
    Parse { detail: String },

    /// Resource not found (404)
    NotFound { resource: &'static str, id: i64 },

    /// Store unreachable (503, logged)
    Unavailable(DbError),

    /// Database error (500, logged)
    Database(DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Decode { detail } => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "decode_error",
                    "message": detail
                }),
            ),
            Self::Parse { detail } => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "parse_error",
                    "message": detail
                }),
            ),
            Self::NotFound { resource, id } => (
                StatusCode::NOT_FOUND,
                json!({
                    "error": "not_found",
                    "message": format!("{} '{}' not found", resource, id)
                }),
            ),
            Self::Unavailable(e) => {
                tracing::error!("Store unavailable: {}", e);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    json!({
                        "error": "unavailable",
                        "message": "the store is unreachable"
                    }),
                )
            }
            Self::Database(e) => {
                // Log the actual error, return generic message
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "internal_error",
                        "message": "an internal error occurred"
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, id } => Self::NotFound { resource, id },
            e @ DbError::Unavailable(_) => Self::Unavailable(e),
            e => Self::Database(e),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Decode {
            detail: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::Parse {
            detail: rejection.body_text(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn decode_error_is_400() {
        let err = ApiError::Decode {
            detail: "expected value".into(),
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn parse_error_is_400() {
        let err = ApiError::Parse {
            detail: "invalid digit".into(),
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn not_found_is_404() {
        let err = ApiError::NotFound {
            resource: "stock",
            id: 999,
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn unavailable_store_is_503() {
        let err = ApiError::from(DbError::from(sqlx::Error::PoolTimedOut));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn query_failure_is_500() {
        let err = ApiError::from(DbError::from(sqlx::Error::Protocol("bad frame".into())));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn db_not_found_maps_to_404() {
        let err = ApiError::from(DbError::NotFound {
            resource: "stock",
            id: 7,
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

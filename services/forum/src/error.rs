//! HTTP-layer error types

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Errors surfaced by the HTTP handlers. Business and validation failures
/// never land here; they travel as field errors inside the GraphQL response.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The relational store is unreachable or rejected a query
    #[error("database error: {0}")]
    Database(#[from] common::error::DatabaseError),

    /// The session store is unreachable
    #[error("session store error: {0}")]
    SessionStore(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Database error"),
            ApiError::SessionStore(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Session store error")
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent API responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// No session token, or the backend reported it invalid.
    #[error("Authentication required")]
    AuthRequired,

    /// The backend rejected or failed the call.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The backend could not be reached at all.
    #[error("Backend unreachable: {0}")]
    Upstream(String),

    #[error("Session operation requires a valid request context")]
    NoRequestContext,

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub const INVALID_RESPONSE_FORMAT: &'static str = "invalid response format";

    /// Backend status code, if this error came from a backend response.
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::BadRequest(errors.to_string())
    }
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::AuthRequired => (StatusCode::UNAUTHORIZED, "unauthorized", None),
            AppError::Api { status, message } => (
                failure_status(*status),
                "api_error",
                Some(message.clone()),
            ),
            AppError::Upstream(msg) => {
                tracing::error!(error = %msg, "Backend unreachable");
                (StatusCode::BAD_GATEWAY, "upstream_error", None)
            }
            AppError::NoRequestContext => {
                tracing::error!("Session used outside of a request context");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", None)
            }
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "bad_request", Some(msg.clone()))
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", None)
            }
        };

        let body = ErrorResponse {
            error: error.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

/// Status to relay for a backend failure. A failure reported against a
/// success status (an undecodable 2xx body) is a bad gateway.
fn failure_status(status: u16) -> StatusCode {
    StatusCode::from_u16(status)
        .ok()
        .filter(|s| s.is_client_error() || s.is_server_error())
        .unwrap_or(StatusCode::BAD_GATEWAY)
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Audio proxy for AI-generated audio artifacts.
//!
//! The artifact is binary, so upstream failures are reported with the
//! upstream status and an empty body; there is no JSON error channel.

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use std::sync::Arc;

use crate::session::Session;
use crate::AppState;

/// Cookie name the backend's audio endpoint reads the token from.
pub const UPSTREAM_AUTH_COOKIE: &str = "auth_token";

/// Browser cache lifetime for audio (24 hours).
pub const AUDIO_CACHE_CONTROL: &str = "public, max-age=86400";

const DEFAULT_AUDIO_TYPE: &str = "audio/mpeg";

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/audio/{id}", get(proxy_audio))
}

/// Stream `/audio/{id}` from the backend to the browser.
async fn proxy_audio(
    State(state): State<Arc<AppState>>,
    session: Session,
    Path(id): Path<String>,
) -> Response {
    let path = format!("/audio/{}", urlencoding::encode(&id));
    let token = session.get().unwrap_or_default();

    let mut upstream_headers = HeaderMap::new();
    match HeaderValue::from_str(&format!("{}={}", UPSTREAM_AUTH_COOKIE, token)) {
        Ok(cookie) => {
            upstream_headers.insert(header::COOKIE, cookie);
        }
        Err(_) => tracing::warn!("Session token is not a valid header value, not forwarding it"),
    }

    let upstream = match state.backend.get_raw(&path, upstream_headers).await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!(error = %e, audio_id = %id, "Audio proxy error");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    let status = upstream.status();
    if !status.is_success() {
        tracing::warn!(status = status.as_u16(), audio_id = %id, "Failed to fetch audio");
        return status.into_response();
    }

    let content_type = upstream
        .headers()
        .get(header::CONTENT_TYPE)
        .cloned()
        .unwrap_or_else(|| HeaderValue::from_static(DEFAULT_AUDIO_TYPE));
    let content_length = upstream.headers().get(header::CONTENT_LENGTH).cloned();

    let mut response = Response::new(Body::from_stream(upstream.bytes_stream()));
    let headers = response.headers_mut();
    headers.insert(header::CONTENT_TYPE, content_type);
    if let Some(length) = content_length {
        headers.insert(header::CONTENT_LENGTH, length);
    }
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static(AUDIO_CACHE_CONTROL),
    );

    response
}

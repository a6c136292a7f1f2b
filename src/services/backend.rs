// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Backend API client.
//!
//! Handles:
//! - Bearer-authenticated calls using the session token
//! - Unauthenticated calls (registration, login)
//! - Clearing the session when the backend answers 401
//! - Normalizing failures into `AppError::Api` with the best message available

use crate::error::{AppError, Result};
use crate::services::error_message::{FailedResponse, MessageChain};
use crate::session::Session;
use axum::http::{header, HeaderMap, HeaderName, HeaderValue, Method, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;

/// Body of an outbound backend request.
#[derive(Debug, Clone)]
enum RequestBody {
    Empty,
    Json(serde_json::Value),
    Form(Vec<(String, String)>),
}

/// A single call to the backend API, relative to its base URL.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    path: String,
    headers: HeaderMap,
    body: RequestBody,
    messages: MessageChain,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: HeaderMap::new(),
            body: RequestBody::Empty,
            messages: MessageChain::DEFAULT,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Attach a JSON body.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self> {
        let value = serde_json::to_value(body)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Request body encoding: {}", e)))?;
        self.body = RequestBody::Json(value);
        Ok(self)
    }

    /// Attach a form-encoded body.
    pub fn form(mut self, fields: &[(&str, &str)]) -> Self {
        self.body = RequestBody::Form(
            fields
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        );
        self
    }

    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Use a different chain for extracting error messages.
    pub fn error_messages(mut self, messages: MessageChain) -> Self {
        self.messages = messages;
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Client for the backend REST API.
#[derive(Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
    /// Whole-call limit for decoded calls. Streaming calls only get the
    /// connect limit, so long bodies are not cut off.
    timeout: Duration,
}

impl BackendClient {
    /// Create a client for the given base URL.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(timeout)
            .build()
            .map_err(|e| AppError::Internal(anyhow::anyhow!("HTTP client init failed: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Call the backend with the session's bearer token.
    ///
    /// Fails with `AuthRequired` before touching the network when the
    /// session holds no token. A 401 from the backend clears the token.
    pub async fn call_authed<T: DeserializeOwned>(
        &self,
        session: &mut Session,
        request: ApiRequest,
    ) -> Result<T> {
        let token = session.get().ok_or(AppError::AuthRequired)?;
        let path = request.path.clone();
        let messages = request.messages;

        let response = self.send(request, Some(&token)).await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            tracing::info!(path = %path, "Backend rejected session token, clearing it");
            session.delete();
        }

        decode(response, &messages).await
    }

    /// Call the backend without credentials.
    pub async fn call_public<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        let messages = request.messages;
        let response = self.send(request, None).await?;
        decode(response, &messages).await
    }

    /// Issue a raw GET and hand back the undecoded response (for streaming).
    ///
    /// The timeout covers connecting and receiving the response head; the
    /// body may take as long as it takes.
    pub async fn get_raw(&self, path: &str, headers: HeaderMap) -> Result<reqwest::Response> {
        let pending = self.http.get(self.url(path)).headers(headers).send();
        tokio::time::timeout(self.timeout, pending)
            .await
            .map_err(|_| AppError::Upstream(format!("no response within {:?}", self.timeout)))?
            .map_err(|e| AppError::Upstream(e.to_string()))
    }

    async fn send(&self, request: ApiRequest, token: Option<&str>) -> Result<reqwest::Response> {
        tracing::debug!(
            method = %request.method,
            path = %request.path,
            authenticated = token.is_some(),
            "Calling backend"
        );

        let mut builder = self
            .http
            .request(request.method, self.url(&request.path))
            .timeout(self.timeout)
            .headers(request.headers)
            .header(header::CACHE_CONTROL, "no-store");

        if let Some(token) = token {
            builder = builder.bearer_auth(token);
        }

        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Form(fields) => builder.form(&fields),
        };

        builder
            .send()
            .await
            .map_err(|e| AppError::Upstream(e.to_string()))
    }
}

/// Turn a backend response into a value or a normalized error.
async fn decode<T: DeserializeOwned>(
    response: reqwest::Response,
    messages: &MessageChain,
) -> Result<T> {
    let status = response.status();

    if !status.is_success() {
        let body = response.bytes().await.unwrap_or_default();
        let message = messages.resolve(&FailedResponse {
            status,
            body: &body,
        });
        tracing::warn!(status = status.as_u16(), message = %message, "Backend call failed");
        return Err(AppError::Api {
            status: status.as_u16(),
            message,
        });
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| AppError::Upstream(e.to_string()))?;

    let body: &[u8] = if status == StatusCode::NO_CONTENT && body.is_empty() {
        b"null"
    } else {
        &body
    };

    serde_json::from_slice(body).map_err(|e| {
        tracing::warn!(error = %e, "Backend returned an undecodable body");
        AppError::Api {
            status: status.as_u16(),
            message: AppError::INVALID_RESPONSE_FORMAT.to_string(),
        }
    })
}

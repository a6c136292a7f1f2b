// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Login, registration, current user and logout.

use crate::error::Result;
use crate::models::{LoginResponse, RegisterRequest, User};
use crate::services::{ApiRequest, BackendClient, MessageChain};
use crate::session::Session;
use serde::Serialize;

/// Log in and store the issued token in the session.
///
/// Returns the backend's full payload, including the nested user when the
/// backend provides one.
pub async fn login(
    backend: &BackendClient,
    session: &mut Session,
    email: &str,
    password: &str,
) -> Result<LoginResponse> {
    let request = ApiRequest::post("/api/auth/login")
        .form(&[("username", email), ("password", password)])
        .error_messages(MessageChain::LOGIN);

    let response: LoginResponse = backend.call_public(request).await?;
    session.set(&response.access_token)?;

    tracing::info!(
        user_id = response.user.as_ref().map(|u| u.id),
        "Login successful, session token stored"
    );

    Ok(response)
}

/// Register a new account. Does not log in; callers follow up with [`login`].
pub async fn register(
    backend: &BackendClient,
    registration: &RegisterRequest,
) -> Result<serde_json::Value> {
    let request = ApiRequest::post("/api/auth/register").json(registration)?;
    let created = backend.call_public(request).await?;
    tracing::info!("Registration accepted by backend");
    Ok(created)
}

/// The signed-in user, or `None`.
///
/// Used opportunistically while bootstrapping pages, so any failure
/// degrades to "not signed in" instead of an error.
pub async fn current_user(backend: &BackendClient, session: &mut Session) -> Option<User> {
    session.get()?;

    match backend
        .call_authed::<User>(session, ApiRequest::get("/api/auth/me"))
        .await
    {
        Ok(user) => Some(user),
        Err(e) => {
            tracing::debug!(error = %e, "Current user lookup failed, treating as signed out");
            None
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub success: bool,
}

/// Clear the session token.
///
/// Unlike [`current_user`], a missing request context is a caller error.
pub fn logout(session: &mut Session) -> Result<LogoutResponse> {
    session.try_delete()?;
    Ok(LogoutResponse { success: true })
}

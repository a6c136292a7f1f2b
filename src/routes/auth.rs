// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Authentication routes: login, registration, current user and logout.

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use validator::Validate;

use super::Reply;
use crate::actions::auth::{self, LogoutResponse};
use crate::error::Result;
use crate::models::{LoginRequest, RegisterRequest, User};
use crate::session::Session;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/register", post(register))
        .route("/api/auth/me", get(me))
        .route("/api/auth/logout", post(logout))
}

/// Login response. The token itself stays in the HTTP-only cookie.
#[derive(Debug, Serialize)]
pub struct LoginReply {
    pub success: bool,
    pub user: Value,
}

#[derive(Debug, Serialize)]
pub struct MeReply {
    pub success: bool,
    pub user: Option<User>,
}

/// Exchange credentials for a session cookie.
async fn login(
    State(state): State<Arc<AppState>>,
    mut session: Session,
    Json(form): Json<LoginRequest>,
) -> Reply<LoginReply> {
    let result = login_and_reply(&state, &mut session, form).await;
    (session, result)
}

async fn login_and_reply(
    state: &AppState,
    session: &mut Session,
    form: LoginRequest,
) -> Result<Json<LoginReply>> {
    form.validate()?;

    let response = auth::login(&state.backend, session, &form.email, &form.password).await?;

    // Fall back to the submitted email when the backend omits the user
    let user = match response.user {
        Some(user) => serde_json::to_value(user)
            .map_err(|e| anyhow::anyhow!("User encoding failed: {}", e))?,
        None => serde_json::json!({ "email": form.email }),
    };

    Ok(Json(LoginReply {
        success: true,
        user,
    }))
}

/// Create an account. The caller logs in separately afterwards.
async fn register(
    State(state): State<Arc<AppState>>,
    Json(form): Json<RegisterRequest>,
) -> Result<Json<Value>> {
    form.validate()?;
    let created = auth::register(&state.backend, &form).await?;
    Ok(Json(created))
}

/// Current user, or `null` when signed out.
async fn me(State(state): State<Arc<AppState>>, mut session: Session) -> (Session, Json<MeReply>) {
    let user = auth::current_user(&state.backend, &mut session).await;
    (
        session,
        Json(MeReply {
            success: true,
            user,
        }),
    )
}

async fn logout(mut session: Session) -> Reply<LogoutResponse> {
    let result = auth::logout(&mut session).map(Json);
    tracing::info!("Session cleared");
    (session, result)
}

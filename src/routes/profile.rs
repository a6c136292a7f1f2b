// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Organization profile routes.

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde_json::Value;
use std::sync::Arc;

use super::Reply;
use crate::actions::profile;
use crate::models::Profile;
use crate::session::Session;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/profile", post(save_profile))
        .route("/api/profile/{user_id}", get(get_profile))
}

async fn save_profile(
    State(state): State<Arc<AppState>>,
    mut session: Session,
    Json(body): Json<Profile>,
) -> Reply<Value> {
    let result = profile::create_or_update_profile(&state.backend, &mut session, &body)
        .await
        .map(Json);
    (session, result)
}

/// Renders `null` when the user has no profile yet.
async fn get_profile(
    State(state): State<Arc<AppState>>,
    mut session: Session,
    Path(user_id): Path<i64>,
) -> Reply<Option<Profile>> {
    let result = profile::get_profile(&state.backend, &mut session, user_id)
        .await
        .map(Json);
    (session, result)
}

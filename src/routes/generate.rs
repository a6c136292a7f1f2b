// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! AI generation routes (strategy plans and outreach content).

use axum::{extract::State, routing::post, Json, Router};
use serde_json::Value;
use std::sync::Arc;

use super::Reply;
use crate::actions::outreach::{self, OutreachRequest};
use crate::actions::strategy::{self, StrategyRequest};
use crate::error::AppError;
use crate::session::Session;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/outreach/generate", post(generate_outreach))
        .route("/api/strategy/generate", post(generate_strategy))
}

async fn generate_outreach(
    State(state): State<Arc<AppState>>,
    mut session: Session,
    Json(body): Json<OutreachRequest>,
) -> Reply<Value> {
    if body.goal.trim().is_empty() {
        return (
            session,
            Err(AppError::BadRequest("An outreach goal is required".to_string())),
        );
    }
    let result = outreach::generate_outreach_content(&state.backend, &mut session, &body)
        .await
        .map(Json);
    (session, result)
}

async fn generate_strategy(
    State(state): State<Arc<AppState>>,
    mut session: Session,
    Json(body): Json<StrategyRequest>,
) -> Reply<Value> {
    if body.query.trim().is_empty() {
        return (
            session,
            Err(AppError::BadRequest("A strategy query is required".to_string())),
        );
    }
    let result = strategy::generate_strategy(&state.backend, &mut session, &body)
        .await
        .map(Json);
    (session, result)
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Mentorship routes.

use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use serde_json::Value;
use std::sync::Arc;

use super::Reply;
use crate::actions::mentorship;
use crate::models::{MentorFilters, MentorOptIn, MentorProfile, Message, NewMessage, SuggestedReply};
use crate::session::Session;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/mentorship/optin", post(opt_in))
        .route("/api/mentorship/mentors", get(list_mentors))
        .route("/api/mentorship/message", post(send_message))
        .route("/api/mentorship/messages/{user_id}", get(list_messages))
        .route("/api/mentorship/reply", post(reply))
        .route(
            "/api/mentorship/suggest_reply/{message_id}",
            get(suggested_reply),
        )
}

async fn opt_in(
    State(state): State<Arc<AppState>>,
    mut session: Session,
    Json(body): Json<MentorOptIn>,
) -> Reply<Value> {
    let result = mentorship::opt_in(&state.backend, &mut session, &body)
        .await
        .map(Json);
    (session, result)
}

/// Any query parameters are forwarded as mentor filters.
async fn list_mentors(
    State(state): State<Arc<AppState>>,
    mut session: Session,
    Query(filters): Query<MentorFilters>,
) -> Reply<Vec<MentorProfile>> {
    let result = mentorship::get_mentors(&state.backend, &mut session, &filters)
        .await
        .map(Json);
    (session, result)
}

async fn send_message(
    State(state): State<Arc<AppState>>,
    mut session: Session,
    Json(message): Json<NewMessage>,
) -> Reply<Value> {
    let result = mentorship::send_message(&state.backend, &mut session, &message)
        .await
        .map(Json);
    (session, result)
}

async fn list_messages(
    State(state): State<Arc<AppState>>,
    mut session: Session,
    Path(user_id): Path<i64>,
) -> Reply<Vec<Message>> {
    let result = mentorship::get_messages(&state.backend, &mut session, user_id)
        .await
        .map(Json);
    (session, result)
}

async fn reply(
    State(state): State<Arc<AppState>>,
    mut session: Session,
    Json(body): Json<Value>,
) -> Reply<Value> {
    let result = mentorship::reply_to_message(&state.backend, &mut session, &body)
        .await
        .map(Json);
    (session, result)
}

async fn suggested_reply(
    State(state): State<Arc<AppState>>,
    mut session: Session,
    Path(message_id): Path<i64>,
) -> Reply<SuggestedReply> {
    let result = mentorship::get_suggested_reply(&state.backend, &mut session, message_id)
        .await
        .map(Json);
    (session, result)
}

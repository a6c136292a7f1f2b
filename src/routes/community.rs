// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Community Q&A routes.

use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post},
    Json, Router,
};
use serde_json::Value;
use std::sync::Arc;

use super::Reply;
use crate::actions::community;
use crate::models::{
    Answer, NewAnswer, NewQuestion, QuestionPage, QuestionQuery, SuggestedAnswer, UserPoints,
};
use crate::session::Session;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/community/questions", get(list_questions))
        .route("/api/community/question", post(post_question))
        .route("/api/community/answer", post(post_answer))
        .route("/api/community/answer/{answer_id}", delete(delete_answer))
        .route(
            "/api/community/answer/{answer_id}/upvote",
            post(upvote_answer),
        )
        .route("/api/community/answers/{question_id}", get(list_answers))
        .route("/api/community/points/{user_id}", get(user_points))
        .route(
            "/api/community/suggested_answer/{question_id}",
            get(suggested_answer),
        )
}

async fn list_questions(
    State(state): State<Arc<AppState>>,
    mut session: Session,
    Query(query): Query<QuestionQuery>,
) -> Reply<QuestionPage> {
    let result = community::get_questions(&state.backend, &mut session, &query)
        .await
        .map(Json);
    (session, result)
}

async fn post_question(
    State(state): State<Arc<AppState>>,
    mut session: Session,
    Json(question): Json<NewQuestion>,
) -> Reply<Value> {
    let result = community::post_question(&state.backend, &mut session, &question)
        .await
        .map(Json);
    (session, result)
}

async fn post_answer(
    State(state): State<Arc<AppState>>,
    mut session: Session,
    Json(answer): Json<NewAnswer>,
) -> Reply<Value> {
    let result = community::post_answer(&state.backend, &mut session, &answer)
        .await
        .map(Json);
    (session, result)
}

async fn delete_answer(
    State(state): State<Arc<AppState>>,
    mut session: Session,
    Path(answer_id): Path<i64>,
) -> Reply<Value> {
    let result = community::delete_answer(&state.backend, &mut session, answer_id)
        .await
        .map(Json);
    (session, result)
}

async fn upvote_answer(
    State(state): State<Arc<AppState>>,
    mut session: Session,
    Path(answer_id): Path<i64>,
) -> Reply<Value> {
    let result = community::upvote_answer(&state.backend, &mut session, answer_id)
        .await
        .map(Json);
    (session, result)
}

async fn list_answers(
    State(state): State<Arc<AppState>>,
    mut session: Session,
    Path(question_id): Path<i64>,
) -> Reply<Vec<Answer>> {
    let result = community::get_answers(&state.backend, &mut session, question_id)
        .await
        .map(Json);
    (session, result)
}

async fn user_points(
    State(state): State<Arc<AppState>>,
    mut session: Session,
    Path(user_id): Path<i64>,
) -> Reply<UserPoints> {
    let result = community::get_user_points(&state.backend, &mut session, user_id)
        .await
        .map(Json);
    (session, result)
}

async fn suggested_answer(
    State(state): State<Arc<AppState>>,
    mut session: Session,
    Path(question_id): Path<i64>,
) -> Reply<SuggestedAnswer> {
    let result = community::get_suggested_answer(&state.backend, &mut session, question_id)
        .await
        .map(Json);
    (session, result)
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Community Q&A actions.

use super::with_query;
use crate::error::Result;
use crate::models::{
    Answer, NewAnswer, NewQuestion, QuestionPage, QuestionQuery, SuggestedAnswer, UserPoints,
};
use crate::services::{ApiRequest, BackendClient};
use crate::session::Session;
use serde_json::Value;

pub async fn post_question(
    backend: &BackendClient,
    session: &mut Session,
    question: &NewQuestion,
) -> Result<Value> {
    let request = ApiRequest::post("/api/community/question").json(question)?;
    backend.call_authed(session, request).await
}

pub async fn post_answer(
    backend: &BackendClient,
    session: &mut Session,
    answer: &NewAnswer,
) -> Result<Value> {
    let request = ApiRequest::post("/api/community/answer").json(answer)?;
    backend.call_authed(session, request).await
}

/// Backend path for a question listing.
pub fn questions_path(query: &QuestionQuery) -> String {
    with_query("/api/community/questions", &query.to_query_string())
}

/// One page of questions matching the optional search and tag filter.
pub async fn get_questions(
    backend: &BackendClient,
    session: &mut Session,
    query: &QuestionQuery,
) -> Result<QuestionPage> {
    let request = ApiRequest::get(questions_path(query));
    backend.call_authed(session, request).await
}

pub async fn get_answers(
    backend: &BackendClient,
    session: &mut Session,
    question_id: i64,
) -> Result<Vec<Answer>> {
    let request = ApiRequest::get(format!("/api/community/answers/{}", question_id));
    backend.call_authed(session, request).await
}

/// Reputation points for a user.
pub async fn get_user_points(
    backend: &BackendClient,
    session: &mut Session,
    user_id: i64,
) -> Result<UserPoints> {
    let request = ApiRequest::get(format!("/api/community/points/{}", user_id));
    backend.call_authed(session, request).await
}

pub async fn upvote_answer(
    backend: &BackendClient,
    session: &mut Session,
    answer_id: i64,
) -> Result<Value> {
    let request = ApiRequest::post(format!("/api/community/answer/{}/upvote", answer_id));
    backend.call_authed(session, request).await
}

/// AI-suggested answer for a question.
pub async fn get_suggested_answer(
    backend: &BackendClient,
    session: &mut Session,
    question_id: i64,
) -> Result<SuggestedAnswer> {
    let request = ApiRequest::get(format!(
        "/api/community/suggested_answer/{}",
        question_id
    ));
    backend.call_authed(session, request).await
}

pub async fn delete_answer(
    backend: &BackendClient,
    session: &mut Session,
    answer_id: i64,
) -> Result<Value> {
    let request = ApiRequest::delete(format!("/api/community/answer/{}", answer_id));
    backend.call_authed(session, request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_questions_path_without_params() {
        assert_eq!(
            questions_path(&QuestionQuery::default()),
            "/api/community/questions"
        );
    }

    #[test]
    fn test_questions_path_with_search_and_filter() {
        let query = QuestionQuery {
            search: Some("grants".to_string()),
            filter: Some("funding".to_string()),
            page: Some(1),
            page_size: Some(10),
        };
        assert_eq!(
            questions_path(&query),
            "/api/community/questions?search=grants&filter=funding&page=1&page_size=10"
        );
    }
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Mentorship program actions.

use super::with_query;
use crate::error::Result;
use crate::models::{MentorFilters, MentorOptIn, MentorProfile, Message, NewMessage, SuggestedReply};
use crate::services::{ApiRequest, BackendClient};
use crate::session::Session;
use serde_json::Value;

/// Opt the current user in as a mentor.
pub async fn opt_in(
    backend: &BackendClient,
    session: &mut Session,
    mentorship: &MentorOptIn,
) -> Result<Value> {
    let request = ApiRequest::post("/api/mentorship/optin").json(mentorship)?;
    backend.call_authed(session, request).await
}

/// Backend path for the mentor listing. Empty filter values are dropped.
pub fn mentors_path(filters: &MentorFilters) -> String {
    let query = filters
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&");
    with_query("/api/mentorship/mentors", &query)
}

pub async fn get_mentors(
    backend: &BackendClient,
    session: &mut Session,
    filters: &MentorFilters,
) -> Result<Vec<MentorProfile>> {
    let request = ApiRequest::get(mentors_path(filters));
    backend.call_authed(session, request).await
}

pub async fn send_message(
    backend: &BackendClient,
    session: &mut Session,
    message: &NewMessage,
) -> Result<Value> {
    let request = ApiRequest::post("/api/mentorship/message").json(message)?;
    backend.call_authed(session, request).await
}

/// Conversation between the current user and `user_id`.
pub async fn get_messages(
    backend: &BackendClient,
    session: &mut Session,
    user_id: i64,
) -> Result<Vec<Message>> {
    let request = ApiRequest::get(format!("/api/mentorship/messages/{}", user_id));
    backend.call_authed(session, request).await
}

/// The reply shape is owned by the backend and forwarded as-is.
pub async fn reply_to_message(
    backend: &BackendClient,
    session: &mut Session,
    reply: &Value,
) -> Result<Value> {
    let request = ApiRequest::post("/api/mentorship/reply").json(reply)?;
    backend.call_authed(session, request).await
}

/// AI-suggested reply to a message.
pub async fn get_suggested_reply(
    backend: &BackendClient,
    session: &mut Session,
    message_id: i64,
) -> Result<SuggestedReply> {
    let request = ApiRequest::get(format!("/api/mentorship/suggest_reply/{}", message_id));
    backend.call_authed(session, request).await
}

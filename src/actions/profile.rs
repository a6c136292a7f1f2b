// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Organization profile actions.

use crate::error::Result;
use crate::models::Profile;
use crate::services::{ApiRequest, BackendClient};
use crate::session::Session;

/// Create the profile, or replace it if one exists.
pub async fn create_or_update_profile(
    backend: &BackendClient,
    session: &mut Session,
    profile: &Profile,
) -> Result<serde_json::Value> {
    let request = ApiRequest::post("/api/profile/").json(profile)?;
    backend.call_authed(session, request).await
}

/// A user's profile, or `None` when they have not created one yet.
pub async fn get_profile(
    backend: &BackendClient,
    session: &mut Session,
    user_id: i64,
) -> Result<Option<Profile>> {
    let request = ApiRequest::get(format!("/api/profile/{}", user_id));
    match backend.call_authed(session, request).await {
        Ok(profile) => Ok(Some(profile)),
        Err(e) if e.is_not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

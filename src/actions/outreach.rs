// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! AI-generated outreach content.

use crate::error::Result;
use crate::services::{ApiRequest, BackendClient};
use crate::session::Session;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutreachRequest {
    pub goal: String,
    #[serde(default)]
    pub audience: String,
    #[serde(default)]
    pub tone: String,
}

/// Generated content is opaque and returned as the backend sent it.
pub async fn generate_outreach_content(
    backend: &BackendClient,
    session: &mut Session,
    goal: &OutreachRequest,
) -> Result<serde_json::Value> {
    let request = ApiRequest::post("/api/outreach/generate").json(goal)?;
    backend.call_authed(session, request).await
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! AI-generated strategy plans.

use crate::error::Result;
use crate::services::{ApiRequest, BackendClient};
use crate::session::Session;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyRequest {
    pub query: String,
}

pub async fn generate_strategy(
    backend: &BackendClient,
    session: &mut Session,
    query: &StrategyRequest,
) -> Result<serde_json::Value> {
    let request = ApiRequest::post("/api/strategy/generate").json(query)?;
    backend.call_authed(session, request).await
}

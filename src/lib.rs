// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! E-CLARIA gateway: the server side of the E-CLARIA dashboard.
//!
//! This crate owns the browser session cookie and proxies the E-CLARIA
//! backend REST API for authentication, organization profiles, community
//! Q&A, mentorship messaging and AI-generated strategy/outreach text.

pub mod actions;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod session;

use config::Config;
use services::BackendClient;

/// Shared application state.
///
/// Holds nothing mutable: per-request credentials live in [`session::Session`].
pub struct AppState {
    pub config: Config,
    pub backend: BackendClient,
}

impl AppState {
    /// Build state from configuration.
    pub fn new(config: Config) -> error::Result<Self> {
        let backend = BackendClient::new(&config.api_url, config.backend_timeout)?;
        Ok(Self { config, backend })
    }
}

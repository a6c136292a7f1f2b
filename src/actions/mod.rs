// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Server actions: one module per backend resource.
//!
//! Each action builds a backend path, picks a method and delegates to
//! [`BackendClient`](crate::services::BackendClient), returning the result
//! unmodified or lightly reshaped. Errors propagate to the caller except
//! where noted (`auth::current_user`, `profile::get_profile`).

pub mod auth;
pub mod community;
pub mod mentorship;
pub mod outreach;
pub mod profile;
pub mod strategy;

/// Append an encoded query string to a path, if there is one.
fn with_query(path: &str, query: &str) -> String {
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query)
    }
}

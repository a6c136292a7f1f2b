// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Page guard for the served front end.
//!
//! Only checks whether a session token is present; validity is the
//! backend's call and is enforced by the API routes.

use crate::session::Session;
use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

pub const LOGIN_PAGE: &str = "/auth/login";
pub const DASHBOARD_PAGE: &str = "/dashboard";

/// What to do with a page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAccess {
    Allow,
    Redirect(&'static str),
}

/// Decide access to a page path.
///
/// Signed-out users are sent from the dashboard to the login page, and
/// signed-in users are sent from the auth pages to the dashboard. The home
/// page is open to everyone.
pub fn page_access(path: &str, signed_in: bool) -> PageAccess {
    if path == "/" {
        return PageAccess::Allow;
    }
    if !signed_in && is_under(path, DASHBOARD_PAGE) {
        return PageAccess::Redirect(LOGIN_PAGE);
    }
    if signed_in && is_under(path, "/auth") {
        return PageAccess::Redirect(DASHBOARD_PAGE);
    }
    PageAccess::Allow
}

fn is_under(path: &str, prefix: &str) -> bool {
    path == prefix
        || path
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Middleware applying [`page_access`] to the static front end.
pub async fn guard_pages(session: Session, request: Request, next: Next) -> Response {
    let signed_in = session.get().is_some();
    match page_access(request.uri().path(), signed_in) {
        PageAccess::Allow => next.run(request).await,
        PageAccess::Redirect(to) => {
            tracing::debug!(from = %request.uri().path(), to, "Redirecting page request");
            Redirect::temporary(to).into_response()
        }
    }
}

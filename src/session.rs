// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Request-scoped credential store backed by the `token` cookie.
//!
//! A [`Session`] is built from the incoming request's `Cookie` header and
//! passed by `&mut` through actions and the backend client. Pending changes
//! are written back as `Set-Cookie` headers when the session is returned as
//! part of the response, on success and failure alike.

use crate::error::{AppError, Result};
use crate::AppState;
use axum::{
    extract::FromRequestParts,
    http::{request::Parts, HeaderMap},
    response::{IntoResponseParts, ResponseParts},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use std::convert::Infallible;
use std::sync::Arc;

/// Name of the session cookie holding the bearer token.
pub const TOKEN_COOKIE: &str = "token";

/// Session cookie lifetime.
pub const TOKEN_MAX_AGE: time::Duration = time::Duration::days(7);

/// Per-request holder of the bearer token.
#[derive(Debug, Clone)]
pub struct Session {
    /// `None` when there is no request context to read or write cookies.
    jar: Option<CookieJar>,
    secure: bool,
}

impl Session {
    /// Session bound to a request's cookies.
    pub fn from_headers(headers: &HeaderMap, secure: bool) -> Self {
        Self {
            jar: Some(CookieJar::from_headers(headers)),
            secure,
        }
    }

    /// Session with no request context.
    pub fn detached() -> Self {
        Self {
            jar: None,
            secure: false,
        }
    }

    pub fn is_attached(&self) -> bool {
        self.jar.is_some()
    }

    /// Current token, if any. Never fails.
    pub fn get(&self) -> Option<String> {
        self.jar
            .as_ref()?
            .get(TOKEN_COOKIE)
            .map(|cookie| cookie.value().to_string())
            .filter(|token| !token.is_empty())
    }

    /// Store a token for the rest of this request and in the browser.
    pub fn set(&mut self, token: &str) -> Result<()> {
        let jar = self.jar.take().ok_or(AppError::NoRequestContext)?;
        let cookie = token_cookie(token.to_string(), self.secure);
        self.jar = Some(jar.add(cookie));
        Ok(())
    }

    /// Remove the token. Idempotent, and a no-op without a request context.
    pub fn delete(&mut self) {
        if let Some(jar) = self.jar.take() {
            self.jar = Some(jar.remove(token_cookie(String::new(), self.secure)));
        }
    }

    /// Remove the token, failing if there is no request context.
    pub fn try_delete(&mut self) -> Result<()> {
        if !self.is_attached() {
            return Err(AppError::NoRequestContext);
        }
        self.delete();
        Ok(())
    }
}

/// Build the token cookie with its fixed attributes.
///
/// Removal uses the same attributes so browsers match the original cookie.
fn token_cookie(value: String, secure: bool) -> Cookie<'static> {
    Cookie::build((TOKEN_COOKIE, value))
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .max_age(TOKEN_MAX_AGE)
        .build()
}

impl FromRequestParts<Arc<AppState>> for Session {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> std::result::Result<Self, Self::Rejection> {
        Ok(Session::from_headers(
            &parts.headers,
            state.config.secure_cookies(),
        ))
    }
}

impl IntoResponseParts for Session {
    type Error = Infallible;

    fn into_response_parts(
        self,
        res: ResponseParts,
    ) -> std::result::Result<ResponseParts, Self::Error> {
        match self.jar {
            Some(jar) => jar.into_response_parts(res),
            None => Ok(res),
        }
    }
}

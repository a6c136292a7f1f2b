// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Middleware modules (page guard, security headers).

pub mod guard;
pub mod security;

pub use guard::guard_pages;

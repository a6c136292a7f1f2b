// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - backend API access.

pub mod backend;
pub mod error_message;

pub use backend::{ApiRequest, BackendClient};
pub use error_message::MessageChain;

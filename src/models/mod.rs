// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for backend-owned entities.
//!
//! The gateway only holds transient, request-scoped copies of these.

pub mod community;
pub mod lenient;
pub mod mentorship;
pub mod profile;
pub mod user;

pub use community::{
    Answer, NewAnswer, NewQuestion, Question, QuestionPage, QuestionQuery, SuggestedAnswer,
    UserPoints,
};
pub use mentorship::{MentorFilters, MentorOptIn, MentorProfile, Message, NewMessage, SuggestedReply};
pub use profile::Profile;
pub use user::{LoginRequest, LoginResponse, RegisterRequest, User};

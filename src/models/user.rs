//! User and authentication payloads exchanged with the backend.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::Validate;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Authenticated user as reported by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct User {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub id: i64,
    pub email: String,
    pub name: String,
    /// Set once the user has created an organization profile
    #[serde(default)]
    #[cfg_attr(feature = "binding-generation", ts(type = "number | null"))]
    pub profile_id: Option<i64>,
    #[serde(default)]
    pub is_mentor: Option<bool>,
}

/// Backend response to a successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    /// Anything else the backend sent along
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Browser login form.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Email and password are required"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Email and password are required"))]
    pub password: String,
}

/// Browser registration form, also the backend registration body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Name, email, and password are required"))]
    pub name: String,
    #[serde(default)]
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Name, email, and password are required"))]
    pub password: String,
}

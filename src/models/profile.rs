//! Non-profit organization profile.

use super::lenient::{null_as_default, tag_list};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Organization profile, used both to submit and to read back.
///
/// Everything except the owner is optional on read; a half-filled profile
/// is a normal state while the user works through the form. Missing and
/// `null` fields read as empty, and `service_tags` may arrive as a
/// comma-separated string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Profile {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub user_id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub mission: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub demographics: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub past_methods: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub fundraising_goals: String,
    #[serde(default, deserialize_with = "tag_list")]
    pub service_tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sustainability_practices: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub operating_years: u32,
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Deserializers for backend fields that may be `null` or loosely typed.

use serde::{de::Error as _, Deserialize, Deserializer};
use serde_json::Value;

/// Read `null` as the type's default.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Tags sent as an array or as one comma-separated string.
pub fn tag_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(Vec::new()),
        Value::String(joined) => Ok(split_tags(&joined)),
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(tag) => {
                    let tag = tag.trim();
                    (!tag.is_empty()).then(|| Ok(tag.to_string()))
                }
                Value::Null => None,
                other => Some(Err(D::Error::custom(format!(
                    "expected tag string, got {}",
                    other
                )))),
            })
            .collect(),
        other => Err(D::Error::custom(format!(
            "expected tag list or string, got {}",
            other
        ))),
    }
}

fn split_tags(joined: &str) -> Vec<String> {
    joined
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

//! Response normalization between raw transport bodies and domain types.
//!
//! The live backend may paginate list responses into a `{results: [...]}`
//! envelope while the mock dataset returns bare arrays; normalization must
//! tolerate both shapes without assuming either exclusively.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::{ContentItem, FetchError};

/// Unwrap a list body into the sequence it carries.
///
/// If the body is an object exposing a `results` array (paginated envelope),
/// that array is used; otherwise the body itself is taken as the sequence.
/// Only the first page is ever considered; a `next` cursor is ignored.
pub fn sequence<T: DeserializeOwned>(body: Value) -> Result<Vec<T>, FetchError> {
    let raw = match body {
        Value::Object(mut map) => match map.remove("results") {
            Some(results @ Value::Array(_)) => results,
            Some(other) => {
                // `results` present but not a sequence: fall back to the body
                map.insert("results".to_string(), other);
                Value::Object(map)
            }
            None => Value::Object(map),
        },
        other => other,
    };

    serde_json::from_value(raw).map_err(|e| FetchError::Malformed(e.to_string()))
}

/// Normalize a list body into content items.
pub fn items(body: Value) -> Result<Vec<ContentItem>, FetchError> {
    sequence(body)
}

/// Build a classified error from a non-2xx HTTP response.
///
/// Message resolution order: a `detail` or `message` field parsed from the
/// body, then the transport's status text, then a generic message carrying
/// the code. The status code is always preserved for classification.
pub fn error_from_response(status: u16, status_text: Option<&str>, body: &str) -> FetchError {
    let parsed = serde_json::from_str::<Value>(body).ok().and_then(|value| {
        value
            .get("detail")
            .or_else(|| value.get("message"))
            .and_then(Value::as_str)
            .map(String::from)
    });

    let message = parsed
        .or_else(|| status_text.filter(|t| !t.is_empty()).map(String::from))
        .unwrap_or_else(|| format!("HTTP error, status {}", status));

    FetchError::from_status(status, message)
}

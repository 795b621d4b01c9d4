//! Decoding of server-side failure bodies into the shared error taxonomy.
//!
//! Servers answer rejected requests with one of: a bare string message, an
//! ASP.NET-style `{ "errors": { field: [messages] } }` validation map, or a
//! generic `{ "title" }` / `{ "message" }` object. Kept as a pure function
//! so it is unit-testable without a server.

use roombook_types::{ApiFailure, Error};
use serde_json::Value;

pub fn decode_failure(status: u16, body: &str) -> Error {
    let mut failure = ApiFailure::default();

    match serde_json::from_str::<Value>(body) {
        Ok(Value::String(s)) => {
            failure.message = Some(s);
        }
        Ok(Value::Object(map)) => {
            if let Some(Value::Object(errors)) = map.get("errors") {
                for (field, messages) in errors {
                    let list = match messages {
                        Value::Array(items) => items
                            .iter()
                            .filter_map(|v| v.as_str().map(String::from))
                            .collect(),
                        Value::String(s) => vec![s.clone()],
                        _ => Vec::new(),
                    };
                    failure.field_errors.insert(field.clone(), list);
                }
            }
            failure.title = map
                .get("title")
                .and_then(Value::as_str)
                .or_else(|| map.get("message").and_then(Value::as_str))
                .map(String::from);
        }
        _ => {
            // Plain-text body (or unparsable JSON): treat as a string message
            let trimmed = body.trim();
            if !trimmed.is_empty() {
                failure.message = Some(trimmed.to_string());
            }
        }
    }

    if failure == ApiFailure::default() {
        failure.title = Some(format!("Request failed with status {}", status));
    }

    Error::Api(failure)
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Classification of raw response bodies into success or typed failure.
//!
//! Fitbit reports logical failures inside the body as an `errors` array
//! rather than relying on the status line, e.g.:
//!
//! ```json
//! {"errors":[{"errorType":"expired_token","message":"Access token expired: ..."}],"success":false}
//! ```

use serde_json::Value;

use crate::error::{FitbitError, Result};

/// Parse a raw body and classify it.
///
/// An empty body is success (`Value::Null`); subscription deletes come
/// back as 204 with no content. A body containing an `errors` array is a
/// failure carrying the first element's `errorType` and `message`.
pub fn interpret(raw_body: &str) -> Result<Value> {
    if raw_body.trim().is_empty() {
        return Ok(Value::Null);
    }

    let value: Value = serde_json::from_str(raw_body)
        .map_err(|e| FitbitError::MalformedResponse(e.to_string()))?;

    if let Some(errors) = value.get("errors").and_then(Value::as_array) {
        let (error_type, message) = first_error(errors);
        return Err(FitbitError::Api {
            error_type,
            message,
        });
    }

    Ok(value)
}

/// Extract `errorType`/`message` from the first element of an `errors`
/// array, degrading to generic strings when fields are missing.
fn first_error(errors: &[Value]) -> (String, String) {
    let first = errors.first();
    let error_type = first
        .and_then(|e| e.get("errorType"))
        .and_then(Value::as_str)
        .unwrap_or("unknown")
        .to_string();
    let message = first
        .and_then(|e| e.get("message"))
        .and_then(Value::as_str)
        .unwrap_or("Fitbit API request failed")
        .to_string();
    (error_type, message)
}

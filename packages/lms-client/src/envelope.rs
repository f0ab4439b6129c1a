//! Response normalization.
//!
//! LMS endpoints disagree on how they report success. Some rely on the HTTP
//! status alone, some add `status: 1` (or an HTTP-style `status: 200`), others
//! `statusCode: 200` or `success: true`, and failure text may live in `message`
//! or `msg`. Every response goes through [`interpret`] so callers only ever see
//! `Result<Value, LmsError>`.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{LmsError, Result};

const REJECTED_FALLBACK: &str = "Request was rejected by the server";

/// Turn a raw HTTP status and body into a success payload or an error.
pub(crate) fn interpret(status: u16, body: &str) -> Result<Value> {
    let parsed = if body.trim().is_empty() {
        Ok(Value::Null)
    } else {
        serde_json::from_str::<Value>(body)
    };

    if !(200..300).contains(&status) {
        let message = parsed
            .ok()
            .as_ref()
            .and_then(backend_message)
            .unwrap_or_else(|| format!("Request failed with status {}", status));
        return Err(LmsError::Api { status, message });
    }

    // A 2xx body that is not JSON (proxy or maintenance page) is not a success
    let payload = parsed?;

    if reports_failure(&payload) {
        let message = backend_message(&payload).unwrap_or_else(|| REJECTED_FALLBACK.to_string());
        return Err(LmsError::Rejected(message));
    }

    Ok(payload)
}

/// Extract the `data` array of a list response. A missing or null `data`
/// field is empty; a body without an object is a parse error.
pub(crate) fn list_data<T: DeserializeOwned>(payload: Value) -> Result<Vec<T>> {
    match payload {
        Value::Object(mut map) => match map.remove("data") {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(data) => Ok(serde_json::from_value(data)?),
        },
        other => Err(LmsError::Parse(format!(
            "expected an object with `data`, got {}",
            kind_of(&other)
        ))),
    }
}

fn reports_failure(payload: &Value) -> bool {
    let Some(map) = payload.as_object() else {
        return false;
    };

    if let Some(success) = map.get("success").and_then(Value::as_bool) {
        if !success {
            return true;
        }
    }
    // `status: 1` and `status: 2xx` both mean success
    if let Some(flag) = map.get("status").and_then(Value::as_i64) {
        if flag != 1 && !(200..300).contains(&flag) {
            return true;
        }
    }
    if let Some(code) = map.get("statusCode").and_then(Value::as_i64) {
        if !(200..300).contains(&code) {
            return true;
        }
    }
    false
}

fn backend_message(payload: &Value) -> Option<String> {
    let map = payload.as_object()?;
    ["message", "msg", "error"]
        .iter()
        .filter_map(|key| map.get(*key).and_then(Value::as_str))
        .map(str::trim)
        .find(|text| !text.is_empty())
        .map(str::to_string)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

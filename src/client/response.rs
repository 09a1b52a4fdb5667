//! Response normalization shared by every resource client

use crate::error::{Error, Result};
use crate::model::dtos::RawResponse;
use serde_json::Value;

/// Message used when an error body is not valid JSON
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Signature of a response normalizer, injected into [`super::ApiClient`]
pub type Normalizer = fn(RawResponse) -> Result<Value>;

/// Handle JSON response with error checking
///
/// Non-2xx responses become [`Error::api`] with the backend's `detail` as the
/// message, or `"Error <status>"` when there is no usable detail. 2xx bodies
/// are parsed and returned as-is.
pub fn handle_json_response(resp: RawResponse) -> Result<Value> {
    if !resp.is_success() {
        let detail = match serde_json::from_str::<Value>(&resp.body) {
            Ok(json) => json.get("detail").and_then(truthy_detail),
            Err(e) => {
                log::warn!("Unparseable error body (status {}): {}", resp.status, e);
                Some(UNKNOWN_ERROR.to_string())
            }
        };
        let message = detail.unwrap_or_else(|| format!("Error {}", resp.status));
        return Err(Error::api(resp.status, message));
    }

    Ok(serde_json::from_str::<Value>(&resp.body)?)
}

// `detail` counts as present only when it is truthy; non-string details
// (validation error lists and the like) are shown as JSON text.
fn truthy_detail(detail: &Value) -> Option<String> {
    match detail {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Array(_) | Value::Object(_) => Some(detail.to_string()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

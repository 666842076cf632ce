//! Accessors for API Gateway proxy events delivered as raw JSON.

use serde_json::Value;

/// Returns the request body text. Object bodies (direct invocations) are
/// re-serialised; a null or absent body yields `None`.
pub fn request_body(event: &Value) -> Option<String> {
    match event.get("body")? {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

pub fn path_parameter<'a>(event: &'a Value, name: &str) -> Option<&'a str> {
    event
        .get("pathParameters")
        .and_then(|parameters| parameters.get(name))
        .and_then(Value::as_str)
}

pub fn gateway_request_id(event: &Value) -> Option<&str> {
    event
        .get("requestContext")
        .and_then(|context| context.get("requestId"))
        .and_then(Value::as_str)
        .filter(|request_id| !request_id.is_empty())
}

//! API Gateway proxy responses with a uniform JSON contract.
//!
//! Every response carries `Content-Type: application/json`. Non-2xx bodies use
//! the `{"error": <category>, "message": <text>}` envelope.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::json;

pub const CONTENT_TYPE_HEADER: &str = "Content-Type";
pub const JSON_CONTENT_TYPE: &str = "application/json";

const INTERNAL_ERROR_MESSAGE: &str = "Unexpected error";

pub type Headers = BTreeMap<String, String>;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiGatewayResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: Headers,
    pub body: String,
}

impl ApiGatewayResponse {
    pub fn content_type(&self) -> Option<&str> {
        self.headers.get(CONTENT_TYPE_HEADER).map(String::as_str)
    }
}

pub fn build(
    status_code: u16,
    headers: Option<Headers>,
    body: impl Into<String>,
) -> ApiGatewayResponse {
    let mut headers = headers.unwrap_or_default();
    headers.insert(
        CONTENT_TYPE_HEADER.to_string(),
        JSON_CONTENT_TYPE.to_string(),
    );

    ApiGatewayResponse {
        status_code,
        headers,
        body: body.into(),
    }
}

pub fn ok(body: impl Into<String>) -> ApiGatewayResponse {
    build(200, None, body)
}

pub fn created(body: impl Into<String>) -> ApiGatewayResponse {
    build(201, None, body)
}

pub fn bad_request(message: &str) -> ApiGatewayResponse {
    error_envelope(400, "Bad request", message)
}

pub fn not_found(message: &str) -> ApiGatewayResponse {
    error_envelope(404, "Not found", message)
}

/// Fixed 500 response. The underlying failure is never echoed to the caller.
pub fn internal_error() -> ApiGatewayResponse {
    error_envelope(500, "Internal Server Error", INTERNAL_ERROR_MESSAGE)
}

/// Renders the `{"message": ...}` body used by successful writes.
pub fn message_body(message: &str) -> String {
    json!({ "message": message }).to_string()
}

fn error_envelope(status_code: u16, error: &str, message: &str) -> ApiGatewayResponse {
    build(
        status_code,
        None,
        json!({
            "error": error,
            "message": message,
        })
        .to_string(),
    )
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;

    fn body_json(response: &ApiGatewayResponse) -> Value {
        serde_json::from_str(&response.body).expect("body should be JSON")
    }

    #[test]
    fn build_injects_content_type_into_supplied_headers() {
        let mut headers = Headers::new();
        headers.insert("X-Trace".to_string(), "abc".to_string());

        let response = build(202, Some(headers), "{}");

        assert_eq!(response.status_code, 202);
        assert_eq!(
            response.headers.get("X-Trace").map(String::as_str),
            Some("abc")
        );
        assert_eq!(response.content_type(), Some(JSON_CONTENT_TYPE));
    }

    #[test]
    fn build_overrides_conflicting_content_type() {
        let mut headers = Headers::new();
        headers.insert(CONTENT_TYPE_HEADER.to_string(), "text/plain".to_string());

        let response = build(200, Some(headers), "{}");
        assert_eq!(response.content_type(), Some(JSON_CONTENT_TYPE));
    }

    #[test]
    fn named_constructors_use_expected_status_codes() {
        assert_eq!(ok("{}").status_code, 200);
        assert_eq!(created("{}").status_code, 201);
        assert_eq!(bad_request("x").status_code, 400);
        assert_eq!(not_found("x").status_code, 404);
        assert_eq!(internal_error().status_code, 500);
    }

    #[test]
    fn error_envelopes_carry_category_and_message() {
        assert_eq!(
            body_json(&bad_request("id is missing")),
            json!({"error": "Bad request", "message": "id is missing"})
        );
        assert_eq!(
            body_json(&not_found("item 7 not found")),
            json!({"error": "Not found", "message": "item 7 not found"})
        );
        assert_eq!(
            body_json(&internal_error()),
            json!({"error": "Internal Server Error", "message": "Unexpected error"})
        );
    }

    #[test]
    fn messages_are_escaped() {
        let response = bad_request(r#"quote " and \ slash"#);
        assert_eq!(body_json(&response)["message"], r#"quote " and \ slash"#);
    }

    #[test]
    fn serializes_in_proxy_shape() {
        let value = serde_json::to_value(ok(message_body("done"))).expect("should serialize");
        assert_eq!(value["statusCode"], 200);
        assert_eq!(value["headers"]["Content-Type"], "application/json");
        assert_eq!(value["body"], r#"{"message":"done"}"#);
    }
}

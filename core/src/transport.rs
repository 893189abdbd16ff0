//! HTTP transport for the EVNotify backend.
//! Single funnel every client operation goes through.

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use serde_json::Value;

use crate::error::ClientError;

/// Production endpoint of the EVNotify backend.
pub const DEFAULT_BASE_URL: &str = "https://evnotify.de:8743/";

const USER_AGENT: &str = concat!("evnotify-rs/", env!("CARGO_PKG_VERSION"));

/// Outcome of one completed request/response cycle.
///
/// Produced for any completed exchange, 4xx/5xx included. If the response
/// body is not valid JSON it is carried as a raw string value, so field
/// extraction against it yields nothing instead of failing.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status code of the exchange.
    pub status: u16,
    /// Parsed JSON body, or the raw text when parsing failed.
    pub body: Value,
}

impl ApiResponse {
    /// Status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Named field of the body, with JSON `null` treated as absent.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.body.get(name).filter(|v| !v.is_null())
    }

    /// Named field as an owned string.
    pub fn str_field(&self, name: &str) -> Option<String> {
        self.field(name).and_then(Value::as_str).map(str::to_owned)
    }

    /// Named field as a bool.
    pub fn bool_field(&self, name: &str) -> Option<bool> {
        self.field(name).and_then(Value::as_bool)
    }
}

/// Performs request/response cycles against a fixed base endpoint.
///
/// Wraps one `reqwest::Client` configured with the per-request timeout and
/// the library User-Agent. Cheap to share by reference; the underlying
/// client pools connections internally.
pub struct Transport {
    base_url: String,
    http: reqwest::Client,
}

impl Transport {
    /// Transport against `base_url`. A trailing slash is added when missing
    /// so operation names concatenate cleanly.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        let mut base_url = base_url.to_string();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Ok(Self { base_url, http })
    }

    /// POST `payload` to the endpoint named by `operation`.
    ///
    /// An empty operation targets the bare base endpoint. Any completed
    /// exchange resolves to an [`ApiResponse`], whatever the status code;
    /// only transport-level faults return an error.
    pub async fn send(
        &self,
        operation: &str,
        payload: Option<&Value>,
    ) -> Result<ApiResponse, ClientError> {
        let url = format!("{}{}", self.base_url, operation);
        tracing::debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(encode_payload(payload))
            .send()
            .await?;

        let status = response.status().as_u16();
        let text = response.text().await?;
        let body = serde_json::from_str(&text).unwrap_or(Value::String(text));
        tracing::debug!("{} responded with status {}", url, status);

        Ok(ApiResponse { status, body })
    }
}

/// Request body for a payload: objects and arrays as JSON text, strings
/// verbatim, other primitives via their JSON form, no payload as an empty
/// body.
fn encode_payload(payload: Option<&Value>) -> String {
    match payload {
        None => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(value) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn encode_object_as_json() {
        let payload = json!({"akey": "EVNOTIFY1", "password": "secret"});
        let body = encode_payload(Some(&payload));
        let parsed: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(parsed, payload);
    }

    #[test]
    fn encode_string_verbatim() {
        assert_eq!(encode_payload(Some(&json!("plain"))), "plain");
    }

    #[test]
    fn encode_number_as_text() {
        assert_eq!(encode_payload(Some(&json!(42))), "42");
    }

    #[test]
    fn encode_absent_as_empty_body() {
        assert_eq!(encode_payload(None), "");
    }

    #[test]
    fn field_skips_json_null() {
        let res = ApiResponse {
            status: 200,
            body: json!({"token": null, "akey": "XYZ987"}),
        };
        assert!(res.field("token").is_none());
        assert_eq!(res.str_field("akey").as_deref(), Some("XYZ987"));
    }

    #[test]
    fn extraction_against_raw_text_body_yields_none() {
        let res = ApiResponse {
            status: 200,
            body: Value::String("<html>bad gateway</html>".to_string()),
        };
        assert!(res.field("token").is_none());
        assert!(res.str_field("akey").is_none());
        assert!(res.bool_field("notified").is_none());
    }

    #[test]
    fn success_range() {
        for (status, expected) in [(200, true), (204, true), (302, false), (401, false)] {
            let res = ApiResponse {
                status,
                body: Value::Null,
            };
            assert_eq!(res.is_success(), expected, "status {status}");
        }
    }
}

//! HTTP transport — the single "POST json to url" capability the channel needs.
//!
//! [`HttpTransport`] understands a small set of passthrough options carried
//! on the message:
//! - `timeout` — per-request timeout in seconds (number)
//! - `headers` — object of extra header name → string value
//! - `query` — object of query parameters appended to the URL
//! - `http_errors` — `false` returns non-2xx responses instead of failing
//! - `json` — replaces the translated body outright
//!
//! Anything else is logged and ignored.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};

use hookcord_core::config::HttpConfig;
use hookcord_core::utils::redact_webhook_url;
use hookcord_core::WebhookRequest;

use crate::error::TransportError;

/// Posts a translated webhook request.
///
/// Whatever `post` returns is handed back to the caller of
/// [`DiscordWebhookChannel::send`](crate::DiscordWebhookChannel::send)
/// unmodified.
#[async_trait]
pub trait Transport: Send + Sync {
    type Response: Send;
    type Error: Send;

    async fn post(&self, url: &str, request: WebhookRequest)
        -> Result<Self::Response, Self::Error>;
}

// ─────────────────────────────────────────────
// HttpTransport
// ─────────────────────────────────────────────

/// reqwest-backed transport.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    /// HTTP client (shared, connection-pooled).
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport with default settings.
    pub fn new() -> Result<Self, TransportError> {
        Self::from_config(&HttpConfig::default())
    }

    /// Create a transport from the `http` config section.
    pub fn from_config(config: &HttpConfig) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { client })
    }

    /// Wrap an existing client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    type Response = reqwest::Response;
    type Error = TransportError;

    async fn post(
        &self,
        url: &str,
        request: WebhookRequest,
    ) -> Result<reqwest::Response, TransportError> {
        let WebhookRequest { mut json, options } = request;
        let mut builder = self.client.post(url);
        let mut http_errors = true;

        for (key, value) in &options {
            match key.as_str() {
                "json" => json = value.clone(),
                "timeout" => builder = builder.timeout(parse_timeout(value)?),
                "headers" => {
                    for (name, header) in string_pairs(key, value)? {
                        builder = builder.header(name, header);
                    }
                }
                "query" => builder = builder.query(&string_pairs(key, value)?),
                "http_errors" => {
                    http_errors = value
                        .as_bool()
                        .ok_or_else(|| invalid(key, "expected a boolean"))?;
                }
                other => debug!(option = other, "ignoring unsupported transport option"),
            }
        }

        debug!(url = %redact_webhook_url(url), "posting webhook payload");
        let response = builder.json(&json).send().await?;
        let status = response.status();

        if http_errors && !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), body = %body, "webhook returned error");
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }
}

fn invalid(key: &str, reason: &str) -> TransportError {
    TransportError::InvalidOption {
        key: key.to_string(),
        reason: reason.to_string(),
    }
}

fn parse_timeout(value: &Value) -> Result<Duration, TransportError> {
    value
        .as_f64()
        .filter(|secs| *secs > 0.0)
        .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
        .ok_or_else(|| invalid("timeout", "expected a positive number of seconds"))
}

/// Flatten an object option into `(name, value)` string pairs.
///
/// Strings are taken verbatim; numbers and booleans use their JSON text.
fn string_pairs(key: &str, value: &Value) -> Result<Vec<(String, String)>, TransportError> {
    let object = value
        .as_object()
        .ok_or_else(|| invalid(key, "expected an object"))?;

    object
        .iter()
        .map(|(name, v)| match v {
            Value::String(s) => Ok((name.clone(), s.clone())),
            Value::Number(_) | Value::Bool(_) => Ok((name.clone(), v.to_string())),
            _ => Err(invalid(key, "values must be strings, numbers or booleans")),
        })
        .collect()
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

//! Configuration schema.
//!
//! Hierarchy: `Config` → `WebhookConfig`, `HttpConfig`.
//!
//! JSON on disk uses **camelCase** keys; Rust uses snake_case.

use serde::{Deserialize, Serialize};

/// Root configuration — loaded from `~/.hookcord/config.json` + env vars.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub webhook: WebhookConfig,
    pub http: HttpConfig,
}

/// Default webhook destination and sender identity.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WebhookConfig {
    /// Discord webhook URL. `None` means "nowhere to send".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Username override applied when a message does not set one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Avatar override applied when a message does not set one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl WebhookConfig {
    /// Whether a non-empty webhook URL is configured.
    pub fn is_configured(&self) -> bool {
        self.url.as_deref().is_some_and(|u| !u.is_empty())
    }
}

/// HTTP client settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HttpConfig {
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// User-Agent header sent with every request.
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: format!("hookcord/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.webhook.url.is_none());
        assert!(!config.webhook.is_configured());
        assert_eq!(config.http.timeout_secs, 30);
        assert!(config.http.user_agent.starts_with("hookcord/"));
    }

    #[test]
    fn test_empty_url_is_not_configured() {
        let webhook = WebhookConfig {
            url: Some(String::new()),
            ..Default::default()
        };
        assert!(!webhook.is_configured());
    }

    #[test]
    fn test_camel_case_roundtrip() {
        let json = r#"{ "webhook": { "avatarUrl": "https://example.com/a.png" }, "http": { "timeoutSecs": 5 } }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(
            config.webhook.avatar_url.as_deref(),
            Some("https://example.com/a.png")
        );
        assert_eq!(config.http.timeout_secs, 5);
        // Missing keys fall back to defaults
        assert!(config.http.user_agent.starts_with("hookcord/"));
    }
}

//! Utility helpers — path resolution and webhook URL display.

use std::path::PathBuf;

/// Get the Hookcord data directory (e.g. `~/.hookcord/`).
pub fn get_data_path() -> PathBuf {
    let home = dirs_next::home_dir().unwrap_or_else(|| PathBuf::from("."));
    home.join(".hookcord")
}

/// Expand `~` to the home directory in a path string.
pub fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs_next::home_dir() {
            return home.join(rest);
        }
    }
    if path == "~" {
        if let Some(home) = dirs_next::home_dir() {
            return home;
        }
    }
    PathBuf::from(path)
}

/// Mask the secret token part of a webhook URL for display.
///
/// `https://discord.com/api/webhooks/123/abcdef` → `https://discord.com/api/webhooks/123/ab****`
///
/// A trailing `/slack` is kept and the segment before it is masked.
pub fn redact_webhook_url(url: &str) -> String {
    if let Some(base) = url.strip_suffix("/slack") {
        return format!("{}/slack", redact_webhook_url(base));
    }
    match url.rsplit_once('/') {
        Some((head, token)) if !token.is_empty() && head.contains("://") => {
            let visible: String = token.chars().take(2).collect();
            format!("{head}/{visible}****")
        }
        _ => url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_path_ends_with_hookcord() {
        let path = get_data_path();
        assert!(path.ends_with(".hookcord"));
    }

    #[test]
    fn test_expand_home_tilde() {
        let expanded = expand_home("~/test/path");
        assert!(!expanded.starts_with("~"));
        assert!(expanded.to_str().unwrap().ends_with("test/path"));
    }

    #[test]
    fn test_expand_home_absolute() {
        let expanded = expand_home("/absolute/path");
        assert_eq!(expanded, PathBuf::from("/absolute/path"));
    }

    #[test]
    fn test_redact_webhook_url() {
        assert_eq!(
            redact_webhook_url("https://discord.com/api/webhooks/123/abcdef"),
            "https://discord.com/api/webhooks/123/ab****"
        );
    }

    #[test]
    fn test_redact_keeps_slack_suffix() {
        assert_eq!(
            redact_webhook_url("https://discord.com/api/webhooks/123/abcdef/slack"),
            "https://discord.com/api/webhooks/123/ab****/slack"
        );
    }

    #[test]
    fn test_redact_leaves_odd_input_alone() {
        assert_eq!(redact_webhook_url("not-a-url"), "not-a-url");
        assert_eq!(redact_webhook_url("https://host/"), "https://host/");
    }
}

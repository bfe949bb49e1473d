//! Config loader — reads `~/.hookcord/config.json` and merges env vars.
//!
//! # Loading precedence
//! 1. Defaults (from `Config::default()`)
//! 2. JSON file at `~/.hookcord/config.json`
//! 3. Environment variables `HOOKCORD_<SECTION>__<FIELD>` (override JSON)

use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::schema::Config;

/// Default config file path.
pub fn get_config_path() -> PathBuf {
    crate::utils::get_data_path().join("config.json")
}

/// Load configuration from the default path + env vars.
///
/// Falls back to `Config::default()` if the file doesn't exist or can't be parsed.
pub fn load_config(path: Option<&Path>) -> Config {
    let config_path = path.map(PathBuf::from).unwrap_or_else(get_config_path);

    load_config_from_path(&config_path)
}

fn load_config_from_path(path: &Path) -> Config {
    if !path.exists() {
        info!("No config file found at {}, using defaults", path.display());
        return apply_env_overrides(Config::default());
    }

    debug!("Loading config from {}", path.display());

    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            warn!("Failed to read config file {}: {}", path.display(), e);
            return apply_env_overrides(Config::default());
        }
    };

    let config: Config = match serde_json::from_str(&content) {
        Ok(c) => c,
        Err(e) => {
            warn!("Failed to parse config JSON: {}", e);
            return apply_env_overrides(Config::default());
        }
    };

    apply_env_overrides(config)
}

/// Save configuration to disk (pretty-printed JSON with camelCase keys).
pub fn save_config(config: &Config, path: Option<&Path>) -> std::io::Result<()> {
    let config_path = path.map(PathBuf::from).unwrap_or_else(get_config_path);

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(config).map_err(std::io::Error::other)?;

    std::fs::write(&config_path, json)?;
    debug!("Config saved to {}", config_path.display());
    Ok(())
}

/// Apply environment variable overrides on top of a loaded config.
///
/// Supported overrides:
/// - `HOOKCORD_WEBHOOK__URL` → `webhook.url`
/// - `HOOKCORD_WEBHOOK__USERNAME` → `webhook.username`
/// - `HOOKCORD_WEBHOOK__AVATAR_URL` → `webhook.avatar_url`
/// - `HOOKCORD_HTTP__TIMEOUT_SECS` → `http.timeout_secs`
/// - `HOOKCORD_HTTP__USER_AGENT` → `http.user_agent`
fn apply_env_overrides(config: Config) -> Config {
    apply_overrides(config, |key| std::env::var(key).ok())
}

/// Apply overrides read through `lookup` (the process env outside of tests).
fn apply_overrides(mut config: Config, lookup: impl Fn(&str) -> Option<String>) -> Config {
    if let Some(val) = lookup("HOOKCORD_WEBHOOK__URL") {
        config.webhook.url = Some(val);
    }
    if let Some(val) = lookup("HOOKCORD_WEBHOOK__USERNAME") {
        config.webhook.username = Some(val);
    }
    if let Some(val) = lookup("HOOKCORD_WEBHOOK__AVATAR_URL") {
        config.webhook.avatar_url = Some(val);
    }
    if let Some(val) = lookup("HOOKCORD_HTTP__TIMEOUT_SECS") {
        match val.parse::<u64>() {
            Ok(n) => config.http.timeout_secs = n,
            Err(_) => warn!(value = %val, "ignoring invalid HOOKCORD_HTTP__TIMEOUT_SECS"),
        }
    }
    if let Some(val) = lookup("HOOKCORD_HTTP__USER_AGENT") {
        config.http.user_agent = val;
    }

    config
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

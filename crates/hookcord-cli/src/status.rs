//! `hookcord status` — show configuration.
//!
//! Prints the config path, the (redacted) default webhook, sender identity
//! and HTTP client settings after env overrides are applied.

use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use hookcord_core::config::{load_config, WebhookConfig};
use hookcord_core::utils::redact_webhook_url;

/// Run the status command.
pub fn run(config_path: &Path) -> Result<()> {
    let config = load_config(Some(config_path));

    println!();
    println!("{}", "🪝 Hookcord Status".cyan().bold());
    println!();

    // Config
    println!(
        "  {:<14} {} {}",
        "Config:".bold(),
        config_path.display(),
        if config_path.exists() {
            "✓".green().to_string()
        } else {
            "(not found)".red().to_string()
        }
    );

    // Webhook
    println!("  {:<14} {}", "Webhook:".bold(), webhook_line(&config.webhook));

    println!(
        "  {:<14} {}",
        "Username:".bold(),
        display_or_default(config.webhook.username.as_deref())
    );
    println!(
        "  {:<14} {}",
        "Avatar:".bold(),
        display_or_default(config.webhook.avatar_url.as_deref())
    );

    // HTTP
    println!(
        "  {:<14} {} | {}",
        "HTTP:".bold(),
        format!("timeout: {}s", config.http.timeout_secs).dimmed(),
        format!("user-agent: {}", config.http.user_agent).dimmed(),
    );

    println!();
    Ok(())
}

fn webhook_line(webhook: &WebhookConfig) -> String {
    match webhook.url.as_deref() {
        Some(url) if webhook.is_configured() => {
            format!("{} {}", redact_webhook_url(url), "✓".green())
        }
        _ => "· not configured".dimmed().to_string(),
    }
}

fn display_or_default(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "(webhook default)".dimmed().to_string(),
    }
}

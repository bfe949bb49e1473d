//! Shared CLI helpers — flag parsing and result printing.

use anyhow::{bail, Result};
use colored::Colorize;

/// Parse a `name=value` field flag.
pub fn parse_field(raw: &str) -> Result<(String, String)> {
    match raw.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.to_string()))
        }
        _ => bail!("invalid field `{raw}`, expected NAME=VALUE"),
    }
}

/// Print a one-line success message.
pub fn print_sent(target: &str, status: u16) {
    println!(
        "{} {} {}",
        "✓".green(),
        target,
        format!("(HTTP {status})").dimmed()
    );
}

/// Print a dry-run preview of what would be posted.
pub fn print_preview(target: &str, body: &serde_json::Value) -> Result<()> {
    println!("{} {}", "POST".cyan().bold(), target);
    println!("{}", serde_json::to_string_pretty(body)?);
    Ok(())
}

/// Print the notice shown when no route is configured.
pub fn print_skipped() {
    println!(
        "{}",
        "· no webhook URL configured, nothing sent (use --url or HOOKCORD_WEBHOOK__URL)".dimmed()
    );
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

//! `hookcord init` — create the config file.
//!
//! Writes `~/.hookcord/config.json` (or `--config PATH`) with defaults plus
//! whatever webhook settings were given on the command line. An existing file
//! is left alone unless `--force` is passed.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use hookcord_core::config::{load_config, save_config, Config};
use hookcord_core::utils::redact_webhook_url;

#[derive(Args, Debug, Default)]
pub struct InitArgs {
    /// Default webhook URL
    #[arg(long)]
    pub url: Option<String>,

    /// Default sender name
    #[arg(long)]
    pub username: Option<String>,

    /// Default avatar URL
    #[arg(long)]
    pub avatar: Option<String>,

    /// Overwrite an existing config file
    #[arg(long, default_value_t = false)]
    pub force: bool,
}

/// Run the init command.
pub fn run(args: InitArgs, config_path: &Path) -> Result<()> {
    println!();
    println!("{}", "🪝 Hookcord — Setup".cyan().bold());
    println!();

    if config_path.exists() && !args.force {
        println!(
            "  {} config already exists at {} {}",
            "✓".green(),
            config_path.display(),
            "(use --force to overwrite)".dimmed()
        );
        println!();
        return Ok(());
    }

    let config = initial_config(&args, load_config(Some(config_path)));
    save_config(&config, Some(config_path))
        .with_context(|| format!("failed to write {}", config_path.display()))?;

    println!(
        "  {} created config at {}",
        "✓".green(),
        config_path.display()
    );
    match config.webhook.url.as_deref() {
        Some(url) => println!("  {} webhook {}", "✓".green(), redact_webhook_url(url)),
        None => println!(
            "  {} no webhook yet; set {} or pass --url",
            "·".dimmed(),
            "webhook.url".bold()
        ),
    }
    println!();
    Ok(())
}

fn initial_config(args: &InitArgs, mut config: Config) -> Config {
    if let Some(url) = &args.url {
        config.webhook.url = Some(url.clone());
    }
    if let Some(username) = &args.username {
        config.webhook.username = Some(username.clone());
    }
    if let Some(avatar) = &args.avatar {
        config.webhook.avatar_url = Some(avatar.clone());
    }
    config
}

//! Hookcord CLI — entry point.
//!
//! # Commands
//!
//! - `hookcord init [--url URL]` — create the config file
//! - `hookcord send --content TEXT [...]` — post a notification to a Discord webhook
//! - `hookcord status` — show configuration

mod helpers;
mod init;
mod send_cmd;
mod status;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use hookcord_core::config::get_config_path;
use hookcord_core::utils::expand_home;

// ─────────────────────────────────────────────
// CLI definition
// ─────────────────────────────────────────────

/// Hookcord — send notifications to Discord webhooks
#[derive(Parser)]
#[command(name = "hookcord", version, about, long_about = None)]
struct Cli {
    /// Config file (default: ~/.hookcord/config.json)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    fn config_path(&self) -> PathBuf {
        self.config
            .as_deref()
            .map(expand_home)
            .unwrap_or_else(get_config_path)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create the config file
    Init(init::InitArgs),

    /// Build a message from flags and post it
    Send {
        #[command(flatten)]
        args: send_cmd::SendArgs,

        /// Enable debug logging
        #[arg(long, default_value_t = false)]
        logs: bool,
    },

    /// Show configuration status
    Status,
}

// ─────────────────────────────────────────────
// Entrypoint
// ─────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config_path();

    match cli.command {
        Commands::Init(args) => init::run(args, &config_path),
        Commands::Send { args, logs } => {
            init_logging(logs);
            send_cmd::run(args, &config_path).await
        }
        Commands::Status => status::run(&config_path),
    }
}

/// Initialize tracing/logging.
fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("hookcord=debug,hookcord_core=debug,hookcord_channels=debug,info")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_send() {
        let cli = Cli::try_parse_from([
            "hookcord",
            "send",
            "--content",
            "hello",
            "--field",
            "Version=1.0",
            "--slack",
            "--logs",
        ])
        .unwrap();

        match cli.command {
            Commands::Send { args, logs } => {
                assert!(logs);
                assert!(args.slack);
                assert_eq!(args.content.as_deref(), Some("hello"));
                assert_eq!(args.fields, vec!["Version=1.0".to_string()]);
            }
            _ => panic!("expected send"),
        }
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::try_parse_from(["hookcord", "status", "--config", "/tmp/hook.json"]).unwrap();
        assert_eq!(cli.config_path(), PathBuf::from("/tmp/hook.json"));
        assert!(matches!(cli.command, Commands::Status));
    }

    #[test]
    fn test_default_config_path() {
        let cli = Cli::try_parse_from(["hookcord", "status"]).unwrap();
        assert_eq!(cli.config_path(), get_config_path());
    }

    #[test]
    fn test_parse_init() {
        let cli = Cli::try_parse_from(["hookcord", "init", "--url", "https://hook", "--force"])
            .unwrap();
        match cli.command {
            Commands::Init(args) => {
                assert_eq!(args.url.as_deref(), Some("https://hook"));
                assert!(args.force);
            }
            _ => panic!("expected init"),
        }
    }
}

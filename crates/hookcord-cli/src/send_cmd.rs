//! `hookcord send` — build a message from flags and post it.
//!
//! Without `--slack` a Discord-native message is built (embed from
//! `--title`/`--description`/`--field`); with `--slack` a Slack-compatible
//! message with one attachment is built and posted to `<url>/slack`.

use std::path::Path;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use serde_json::Value;
use tracing::info;

use hookcord_channels::webhook::prepare_request;
use hookcord_channels::{AnonymousNotifiable, DiscordWebhookChannel, HttpTransport, MessagePayload};
use hookcord_core::config::{load_config, WebhookConfig};
use hookcord_core::messages::{DiscordMessage, SlackMessage};
use hookcord_core::utils::redact_webhook_url;

use crate::helpers;

/// Slack message level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Level {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Args, Debug)]
pub struct SendArgs {
    /// Message text
    #[arg(short, long)]
    pub content: Option<String>,

    /// Webhook URL (overrides config)
    #[arg(long)]
    pub url: Option<String>,

    /// Sender name override
    #[arg(long)]
    pub username: Option<String>,

    /// Avatar URL override (Discord shape only)
    #[arg(long)]
    pub avatar: Option<String>,

    /// Send as text-to-speech (Discord shape only)
    #[arg(long, default_value_t = false)]
    pub tts: bool,

    /// Embed / attachment title
    #[arg(long)]
    pub title: Option<String>,

    /// Embed description / attachment text
    #[arg(long)]
    pub description: Option<String>,

    /// Embed / attachment color, e.g. "#5865F2" or "good"
    #[arg(long)]
    pub color: Option<String>,

    /// Field as NAME=VALUE (repeatable)
    #[arg(long = "field", value_name = "NAME=VALUE")]
    pub fields: Vec<String>,

    /// Use the Slack-compatible shape
    #[arg(long, default_value_t = false)]
    pub slack: bool,

    /// Channel override (Slack shape only)
    #[arg(long)]
    pub channel: Option<String>,

    /// Emoji icon, e.g. ":ghost:" (Slack shape only)
    #[arg(long)]
    pub icon: Option<String>,

    /// Message level (Slack shape only)
    #[arg(long, value_enum)]
    pub level: Option<Level>,

    /// Print the request instead of sending it
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}

impl SendArgs {
    fn has_rich_content(&self) -> bool {
        self.title.is_some()
            || self.description.is_some()
            || self.color.is_some()
            || !self.fields.is_empty()
    }
}

/// Run the send command.
pub async fn run(args: SendArgs, config_path: &Path) -> Result<()> {
    let config = load_config(Some(config_path));
    let webhook = resolve_webhook(&args, &config.webhook);
    let payload = build_payload(&args, &webhook)?;

    let to = match webhook.url.as_deref() {
        Some(url) => AnonymousNotifiable::new().route("discord", url),
        None => AnonymousNotifiable::new(),
    };

    if args.dry_run {
        match webhook.url.as_deref() {
            Some(url) if webhook.is_configured() => {
                let (target, request) = prepare_request(url, &payload);
                helpers::print_preview(&redact_webhook_url(&target), &request.into_value())?;
            }
            _ => helpers::print_skipped(),
        }
        return Ok(());
    }

    let transport = HttpTransport::from_config(&config.http).context("failed to build HTTP client")?;
    let channel = DiscordWebhookChannel::new(transport);

    info!(shape = payload.shape(), "dispatching notification");
    match channel
        .send(&to, &payload)
        .await
        .context("webhook delivery failed")?
    {
        Some(response) => {
            let target = redact_webhook_url(response.url().as_str());
            helpers::print_sent(&target, response.status().as_u16());
        }
        None => helpers::print_skipped(),
    }

    Ok(())
}

/// Webhook settings with `--url` applied over the config.
fn resolve_webhook(args: &SendArgs, config: &WebhookConfig) -> WebhookConfig {
    WebhookConfig {
        url: args.url.clone().or_else(|| config.url.clone()),
        ..config.clone()
    }
}

/// Build the message described by the flags.
///
/// Config defaults fill in the sender name and avatar when the flags don't.
pub fn build_payload(args: &SendArgs, defaults: &WebhookConfig) -> Result<MessagePayload> {
    let fields = args
        .fields
        .iter()
        .map(|raw| helpers::parse_field(raw))
        .collect::<Result<Vec<_>>>()?;

    let username = args.username.clone().or(defaults.username.clone());

    if args.slack {
        let mut builder = SlackMessage::builder();
        builder = match args.level.unwrap_or(Level::Info) {
            Level::Info => builder.info(),
            Level::Success => builder.success(),
            Level::Warning => builder.warning(),
            Level::Error => builder.error(),
        };
        if let Some(content) = &args.content {
            builder = builder.content(content);
        }
        if let Some(username) = username {
            builder = builder.from(username, None);
        }
        if let Some(channel) = &args.channel {
            builder = builder.to(channel);
        }
        if args.has_rich_content() {
            builder = builder.attachment(|mut a| {
                if let Some(title) = &args.title {
                    a = a.title(title, None);
                }
                if let Some(text) = &args.description {
                    a = a.content(text).fallback(text);
                }
                if let Some(color) = &args.color {
                    a = a.color(color);
                }
                a.fields(fields)
            });
        }
        let mut message = builder.build();
        message.icon = args.icon.clone();
        return Ok(message.into());
    }

    let mut builder = DiscordMessage::builder();
    if let Some(content) = &args.content {
        builder = builder.content(content);
    }
    if let Some(username) = username {
        builder = builder.from(username, None);
    }
    if args.tts {
        builder = builder.tts(true);
    }
    if args.has_rich_content() {
        builder = builder.embed(|mut e| {
            if let Some(title) = &args.title {
                e = e.title(title);
            }
            if let Some(description) = &args.description {
                e = e.description(description);
            }
            if let Some(color) = &args.color {
                e = e.color(parse_color(color));
            }
            for (name, value) in fields {
                e = e.field(name, value, true);
            }
            e
        });
    }

    // An avatar override does not need a username override.
    let mut message = builder.build();
    message.avatar_url = args.avatar.clone().or_else(|| defaults.avatar_url.clone());
    Ok(message.into())
}

/// `#RRGGBB`, `0xRRGGBB` and decimal colors become integers; anything else
/// is passed through as a string.
fn parse_color(raw: &str) -> Value {
    let hex = raw
        .strip_prefix('#')
        .or_else(|| raw.strip_prefix("0x"))
        .map(|h| u32::from_str_radix(h, 16));

    match hex {
        Some(Ok(n)) => Value::from(n),
        Some(Err(_)) => Value::from(raw),
        None => raw
            .parse::<u32>()
            .map(Value::from)
            .unwrap_or_else(|_| Value::from(raw)),
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

//! Hookcord Core — message builders, webhook payload translation, config.
//!
//! This crate provides:
//! - **messages**: fluent builders for Discord-native and Slack-compatible messages
//! - **payload**: pure translation of a built message into the webhook JSON body
//! - **config**: `~/.hookcord/config.json` schema, loader and env overrides
//!
//! Nothing in here performs I/O on the network; dispatch lives in
//! `hookcord-channels`.

pub mod config;
pub mod messages;
pub mod payload;
pub mod utils;

pub use messages::{
    DiscordEmbed, DiscordMessage, EmbedField, EpochSeconds, FieldEntry, SlackAttachment,
    SlackAttachmentField, SlackLevel, SlackMessage, Timestamp,
};
pub use payload::{build_discord_payload, build_slack_payload, WebhookRequest};

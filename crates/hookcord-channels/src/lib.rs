//! Hookcord Channels — notification dispatch to Discord webhooks.
//!
//! This crate provides:
//! - **base**: the `Notifiable` / `Notification` collaborator traits and the
//!   `MessagePayload` shape tag
//! - **transport**: the `Transport` trait and the reqwest-backed `HttpTransport`
//! - **webhook**: `DiscordWebhookChannel`, which resolves a route, translates
//!   the message and issues a single POST

pub mod base;
pub mod error;
pub mod transport;
pub mod webhook;

pub use base::{AnonymousNotifiable, MessagePayload, Notifiable, Notification};
pub use error::TransportError;
pub use transport::{HttpTransport, Transport};
pub use webhook::DiscordWebhookChannel;

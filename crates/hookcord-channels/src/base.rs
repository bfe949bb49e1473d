//! Collaborator traits — who receives a notification and what it says.
//!
//! The webhook channel asks the [`Notifiable`] where to send and the
//! [`Notification`] what to send. The answer to the second question is a
//! [`MessagePayload`], whose variant decides which payload shape is built.

use std::collections::HashMap;

use hookcord_core::messages::{DiscordMessage, SlackMessage};

/// A message in one of the two supported shapes.
#[derive(Clone, Debug)]
pub enum MessagePayload {
    /// Discord-native message, posted to the webhook URL as-is.
    Discord(DiscordMessage),
    /// Slack-compatible message, posted to `<url>/slack`.
    Slack(SlackMessage),
}

impl MessagePayload {
    /// Short shape name for logs.
    pub fn shape(&self) -> &'static str {
        match self {
            MessagePayload::Discord(_) => "discord",
            MessagePayload::Slack(_) => "slack",
        }
    }
}

impl From<DiscordMessage> for MessagePayload {
    fn from(message: DiscordMessage) -> Self {
        MessagePayload::Discord(message)
    }
}

impl From<SlackMessage> for MessagePayload {
    fn from(message: SlackMessage) -> Self {
        MessagePayload::Slack(message)
    }
}

/// A recipient that can name a destination for a channel.
pub trait Notifiable: Send + Sync {
    /// Destination for `channel` (e.g. `"discord"`), or `None` to skip.
    ///
    /// An empty string is treated the same as `None`.
    fn route_notification_for(
        &self,
        channel: &str,
        notification: &dyn Notification,
    ) -> Option<String>;
}

/// Something worth telling a [`Notifiable`] about.
pub trait Notification: Send + Sync {
    /// Build the message to deliver over Discord.
    fn to_discord(&self, notifiable: &dyn Notifiable) -> MessagePayload;
}

/// A ready-made message is its own notification.
impl Notification for MessagePayload {
    fn to_discord(&self, _notifiable: &dyn Notifiable) -> MessagePayload {
        self.clone()
    }
}

/// Recipient with explicit, on-demand routes.
///
/// ```
/// use hookcord_channels::AnonymousNotifiable;
///
/// let to = AnonymousNotifiable::new().route("discord", "https://discord.com/api/webhooks/1/x");
/// ```
#[derive(Clone, Debug, Default)]
pub struct AnonymousNotifiable {
    routes: HashMap<String, String>,
}

impl AnonymousNotifiable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the route for `channel`.
    pub fn route(mut self, channel: impl Into<String>, target: impl Into<String>) -> Self {
        self.routes.insert(channel.into(), target.into());
        self
    }
}

impl Notifiable for AnonymousNotifiable {
    fn route_notification_for(
        &self,
        channel: &str,
        _notification: &dyn Notification,
    ) -> Option<String> {
        self.routes.get(channel).cloned()
    }
}

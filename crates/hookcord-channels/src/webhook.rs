//! Discord webhook channel.
//!
//! One `send` is one linear pass:
//! 1. ask the recipient for its `"discord"` route (none → silent skip)
//! 2. ask the notification for its message
//! 3. translate by shape; Slack-shaped messages go to `<url>/slack`
//! 4. POST once and return the transport's result untouched

use tracing::{debug, info};

use hookcord_core::payload::{build_discord_payload, build_slack_payload, WebhookRequest};
use hookcord_core::utils::redact_webhook_url;

use crate::base::{MessagePayload, Notifiable, Notification};
use crate::transport::Transport;

/// Route key asked of every recipient.
pub const CHANNEL_NAME: &str = "discord";

/// Path suffix of Discord's Slack-compatible endpoint.
pub const SLACK_SUFFIX: &str = "/slack";

/// Sends notifications to Discord webhooks through a [`Transport`].
///
/// Holds no per-call state, so one instance can serve concurrent sends.
#[derive(Clone, Debug)]
pub struct DiscordWebhookChannel<T> {
    transport: T,
}

impl<T: Transport> DiscordWebhookChannel<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Channel name, matching the route key recipients are asked for.
    pub fn name(&self) -> &str {
        CHANNEL_NAME
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send `notification` to `notifiable`.
    ///
    /// Returns `Ok(None)` without touching the network when the recipient
    /// has no (or an empty) Discord route. Transport failures are returned
    /// exactly as the transport reported them.
    pub async fn send(
        &self,
        notifiable: &dyn Notifiable,
        notification: &dyn Notification,
    ) -> Result<Option<T::Response>, T::Error> {
        let url = match notifiable
            .route_notification_for(CHANNEL_NAME, notification)
            .filter(|url| !url.is_empty())
        {
            Some(url) => url,
            None => {
                debug!("no discord route for notifiable, skipping");
                return Ok(None);
            }
        };

        let payload = notification.to_discord(notifiable);
        let shape = payload.shape();
        let (target, request) = prepare_request(&url, &payload);

        info!(
            shape = shape,
            url = %redact_webhook_url(&target),
            "sending discord webhook notification"
        );
        self.transport.post(&target, request).await.map(Some)
    }
}

/// Translate `payload` and pick its target URL.
///
/// Pure: no I/O. Exposed so callers can preview what `send` would post.
pub fn prepare_request(url: &str, payload: &MessagePayload) -> (String, WebhookRequest) {
    match payload {
        MessagePayload::Slack(message) => {
            (format!("{url}{SLACK_SUFFIX}"), build_slack_payload(message))
        }
        MessagePayload::Discord(message) => (url.to_string(), build_discord_payload(message)),
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

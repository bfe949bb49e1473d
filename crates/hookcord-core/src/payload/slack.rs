//! Slack-compatible payload, for the webhook's `/slack` endpoint.

use serde_json::{json, Map, Value};

use super::{Optional, WebhookRequest};
use crate::messages::{FieldEntry, SlackAction, SlackAttachment, SlackAttachmentField, SlackMessage};

/// Build the webhook request for a Slack-compatible message.
///
/// `text` and `attachments` are always present; every other top-level key is
/// emitted only when truthy.
pub fn build_slack_payload(message: &SlackMessage) -> WebhookRequest {
    let mut body = Map::new();
    body.insert("text".into(), json!(message.content));
    body.insert(
        "attachments".into(),
        Value::Array(
            message
                .attachments
                .iter()
                .map(|a| attachment(a, message.color()))
                .collect(),
        ),
    );

    Optional::default()
        .with("channel", message.channel.clone())
        .with("icon_emoji", message.icon.clone())
        .with("icon_url", message.image.clone())
        .with("link_names", message.link_names)
        .with("unfurl_links", message.unfurl_links)
        .with("unfurl_media", message.unfurl_media)
        .with("username", message.username.clone())
        .merge_into(&mut body);

    WebhookRequest {
        json: Value::Object(body),
        options: message.http.clone(),
    }
}

fn attachment(attachment: &SlackAttachment, default_color: Option<&str>) -> Value {
    let color = attachment
        .color
        .as_deref()
        .filter(|c| !super::is_falsy(&json!(c)))
        .or(default_color);

    Optional::default()
        .with("actions", Value::Array(attachment.actions.iter().map(action).collect()))
        .with("author_icon", attachment.author_icon.clone())
        .with("author_link", attachment.author_link.clone())
        .with("author_name", attachment.author_name.clone())
        .with("color", color)
        .with("fallback", attachment.fallback.clone())
        .with("fields", Value::Array(attachment.fields.iter().map(field).collect()))
        .with("footer", attachment.footer.clone())
        .with("footer_icon", attachment.footer_icon.clone())
        .with("image_url", attachment.image_url.clone())
        .with("mrkdwn_in", attachment.markdown.clone())
        .with("pretext", attachment.pretext.clone())
        .with("text", attachment.content.clone())
        .with("thumb_url", attachment.thumb_url.clone())
        .with("title", attachment.title.clone())
        .with("title_link", attachment.url.clone())
        .with("ts", attachment.timestamp.as_ref().map(|t| t.epoch_seconds()))
        .into_object()
}

fn action(action: &SlackAction) -> Value {
    json!({
        "type": "button",
        "text": action.text,
        "url": action.url,
        "style": action.style,
    })
}

fn field(entry: &FieldEntry<SlackAttachmentField>) -> Value {
    match entry {
        FieldEntry::Structured(f) => json!({
            "title": f.title,
            "value": f.value,
            "short": f.short,
        }),
        FieldEntry::Pair { name, value } => json!({
            "title": name,
            "value": value,
            "short": true,
        }),
    }
}

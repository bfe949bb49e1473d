//! Discord-native payload.

use serde_json::{json, Map, Value};

use super::{Optional, WebhookRequest};
use crate::messages::{DiscordEmbed, DiscordMessage, EmbedField, FieldEntry};

/// Build the webhook request for a Discord-native message.
///
/// `content` and `embeds` are always present. `username`, `avatar_url`, `tts`
/// and `timestamp` appear only when set to a truthy value, so `tts(false)`
/// is omitted just like an unset flag.
pub fn build_discord_payload(message: &DiscordMessage) -> WebhookRequest {
    let mut body = Map::new();
    body.insert("content".into(), json!(message.content));
    body.insert(
        "embeds".into(),
        Value::Array(message.embeds.iter().map(embed).collect()),
    );

    Optional::default()
        .with("username", message.username.clone())
        .with("avatar_url", message.avatar_url.clone())
        .with("tts", message.tts)
        .with("timestamp", message.timestamp.as_ref().map(|t| t.epoch_seconds()))
        .merge_into(&mut body);

    WebhookRequest {
        json: Value::Object(body),
        options: message.http.clone(),
    }
}

fn embed(embed: &DiscordEmbed) -> Value {
    Optional::default()
        .with("color", embed.color.clone())
        .with("title", embed.title.clone())
        .with("description", embed.description.clone())
        .with("link", embed.url.clone())
        .with("thumbnail", embed.thumbnail.clone())
        .with("image", embed.image.clone())
        .with("footer", embed.footer.clone())
        .with("author", embed.author.clone())
        .with("fields", Value::Array(embed.fields.iter().map(field).collect()))
        .into_object()
}

fn field(entry: &FieldEntry<EmbedField>) -> Value {
    match entry {
        FieldEntry::Structured(f) => json!({
            "name": f.name,
            "value": f.value,
            "inline": f.inline,
        }),
        FieldEntry::Pair { name, value } => json!({
            "name": name,
            "value": value,
            "inline": true,
        }),
    }
}

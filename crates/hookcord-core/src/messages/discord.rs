//! Discord-native message types and their builders.

use serde_json::Value;

use super::{pairs, FieldEntry, HttpOptions, Timestamp};

// ─────────────────────────────────────────────
// DiscordMessage
// ─────────────────────────────────────────────

/// A Discord webhook message, ready for translation.
#[derive(Clone, Debug, Default)]
pub struct DiscordMessage {
    /// Message contents (Discord allows up to 2000 characters).
    pub content: Option<String>,
    /// Overrides the webhook's default username.
    pub username: Option<String>,
    /// Overrides the webhook's default avatar.
    pub avatar_url: Option<String>,
    /// Text-to-speech flag.
    pub tts: Option<bool>,
    pub timestamp: Option<Timestamp>,
    /// Embedded rich content, in display order.
    pub embeds: Vec<DiscordEmbed>,
    /// Extra transport options, passed through untouched.
    pub http: HttpOptions,
}

impl DiscordMessage {
    pub fn builder() -> DiscordMessageBuilder {
        DiscordMessageBuilder::default()
    }
}

/// Fluent builder for [`DiscordMessage`].
///
/// No validation happens here: a message built without `content` simply
/// serializes with an empty content field.
#[derive(Clone, Debug, Default)]
pub struct DiscordMessageBuilder {
    message: DiscordMessage,
}

impl DiscordMessageBuilder {
    /// Set the message contents.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.message.content = Some(content.into());
        self
    }

    /// Override the webhook's username and, when given, its avatar.
    ///
    /// Passing `None` for the avatar leaves any earlier avatar in place.
    pub fn from(mut self, username: impl Into<String>, avatar_url: Option<&str>) -> Self {
        self.message.username = Some(username.into());
        if let Some(avatar) = avatar_url {
            self.message.avatar_url = Some(avatar.to_string());
        }
        self
    }

    /// Send as a text-to-speech message.
    pub fn tts(mut self, enabled: bool) -> Self {
        self.message.tts = Some(enabled);
        self
    }

    pub fn timestamp<T>(mut self, timestamp: T) -> Self
    where
        T: super::EpochSeconds + Send + Sync + 'static,
    {
        self.message.timestamp = Some(Timestamp::new(timestamp));
        self
    }

    /// Append an embed, configured by `configure`.
    pub fn embed<F>(mut self, configure: F) -> Self
    where
        F: FnOnce(EmbedBuilder) -> EmbedBuilder,
    {
        let embed = configure(DiscordEmbed::builder()).build();
        self.message.embeds.push(embed);
        self
    }

    /// Append an already built embed.
    pub fn with_embed(mut self, embed: DiscordEmbed) -> Self {
        self.message.embeds.push(embed);
        self
    }

    /// Set additional request options for the HTTP transport.
    ///
    /// Replaces any options set earlier.
    pub fn http(mut self, options: HttpOptions) -> Self {
        self.message.http = options;
        self
    }

    pub fn build(self) -> DiscordMessage {
        self.message
    }
}

// ─────────────────────────────────────────────
// DiscordEmbed
// ─────────────────────────────────────────────

/// Discord embed — structured rich content inside a message.
///
/// `color`, `thumbnail`, `image`, `footer` and `author` accept either a plain
/// value (string, integer) or a structured JSON object such as
/// `{"url": "..."}`; they are emitted as given.
#[derive(Clone, Debug, Default)]
pub struct DiscordEmbed {
    pub color: Option<Value>,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Emitted under the `link` key.
    pub url: Option<String>,
    pub thumbnail: Option<Value>,
    pub image: Option<Value>,
    pub footer: Option<Value>,
    pub author: Option<Value>,
    pub fields: Vec<FieldEntry<EmbedField>>,
}

impl DiscordEmbed {
    pub fn builder() -> EmbedBuilder {
        EmbedBuilder::default()
    }
}

/// Fluent builder for [`DiscordEmbed`].
#[derive(Clone, Debug, Default)]
pub struct EmbedBuilder {
    embed: DiscordEmbed,
}

impl EmbedBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.embed.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.embed.description = Some(description.into());
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.embed.url = Some(url.into());
        self
    }

    /// Set the embed color, e.g. `0x5865F2` or `"#5865F2"`.
    pub fn color(mut self, color: impl Into<Value>) -> Self {
        self.embed.color = Some(color.into());
        self
    }

    pub fn thumbnail(mut self, thumbnail: impl Into<Value>) -> Self {
        self.embed.thumbnail = Some(thumbnail.into());
        self
    }

    pub fn image(mut self, image: impl Into<Value>) -> Self {
        self.embed.image = Some(image.into());
        self
    }

    pub fn footer(mut self, footer: impl Into<Value>) -> Self {
        self.embed.footer = Some(footer.into());
        self
    }

    pub fn author(mut self, author: impl Into<Value>) -> Self {
        self.embed.author = Some(author.into());
        self
    }

    /// Append a structured field.
    pub fn field(self, name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        self.structured_field(EmbedField::new(name, value).inline(inline))
    }

    pub fn structured_field(mut self, field: EmbedField) -> Self {
        self.embed.fields.push(FieldEntry::Structured(field));
        self
    }

    /// Append shorthand `(name, value)` pairs; each renders inline.
    pub fn fields<I, K, V>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.embed.fields.extend(pairs(entries));
        self
    }

    pub fn build(self) -> DiscordEmbed {
        self.embed
    }
}

// ─────────────────────────────────────────────
// EmbedField
// ─────────────────────────────────────────────

/// A structured embed field. Emitted verbatim as `{name, value, inline}`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

impl EmbedField {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            inline: false,
        }
    }

    pub fn inline(mut self, inline: bool) -> Self {
        self.inline = inline;
        self
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builder_defaults() {
        let msg = DiscordMessage::builder().build();
        assert!(msg.content.is_none());
        assert!(msg.username.is_none());
        assert!(msg.tts.is_none());
        assert!(msg.embeds.is_empty());
        assert!(msg.http.is_empty());
    }

    #[test]
    fn test_from_without_avatar_keeps_previous() {
        let msg = DiscordMessage::builder()
            .from("first", Some("https://example.com/a.png"))
            .from("second", None)
            .build();
        assert_eq!(msg.username.as_deref(), Some("second"));
        assert_eq!(msg.avatar_url.as_deref(), Some("https://example.com/a.png"));
    }

    #[test]
    fn test_embeds_append_in_order() {
        let msg = DiscordMessage::builder()
            .content("hi")
            .embed(|e| e.title("one"))
            .embed(|e| e.title("two"))
            .build();
        let titles: Vec<_> = msg
            .embeds
            .iter()
            .map(|e| e.title.as_deref().unwrap())
            .collect();
        assert_eq!(titles, vec!["one", "two"]);
    }

    #[test]
    fn test_with_embed_appends_prebuilt() {
        let footer = DiscordEmbed::builder().title("footer").build();
        let msg = DiscordMessage::builder()
            .embed(|e| e.title("first"))
            .with_embed(footer)
            .build();
        assert_eq!(msg.embeds.len(), 2);
        assert_eq!(msg.embeds[1].title.as_deref(), Some("footer"));
    }

    #[test]
    fn test_mixed_fields_keep_insertion_order() {
        let embed = DiscordEmbed::builder()
            .field("A", "1", false)
            .fields([("B", "2"), ("C", "3")])
            .structured_field(EmbedField::new("D", "4"))
            .build();

        assert_eq!(embed.fields.len(), 4);
        assert_eq!(
            embed.fields[0],
            FieldEntry::Structured(EmbedField::new("A", "1"))
        );
        assert_eq!(embed.fields[1], FieldEntry::pair("B", "2"));
        assert_eq!(embed.fields[2], FieldEntry::pair("C", "3"));
    }

    #[test]
    fn test_structured_values_kept_as_given() {
        let embed = DiscordEmbed::builder()
            .color(0x5865F2)
            .thumbnail(json!({ "url": "https://example.com/t.png" }))
            .footer("footer text")
            .build();
        assert_eq!(embed.color, Some(json!(5793266)));
        assert_eq!(
            embed.thumbnail,
            Some(json!({ "url": "https://example.com/t.png" }))
        );
        assert_eq!(embed.footer, Some(json!("footer text")));
    }

    #[test]
    fn test_http_options_replace() {
        let mut first = HttpOptions::new();
        first.insert("timeout".into(), json!(5));
        let mut second = HttpOptions::new();
        second.insert("http_errors".into(), json!(false));

        let msg = DiscordMessage::builder().http(first).http(second).build();
        assert!(msg.http.get("timeout").is_none());
        assert_eq!(msg.http.get("http_errors"), Some(&json!(false)));
    }
}

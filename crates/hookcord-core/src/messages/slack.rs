//! Slack-compatible message types and their builders.
//!
//! Discord webhooks accept this shape on their `/slack` endpoint, which is
//! handy when a notification already speaks Slack.

use super::{pairs, EpochSeconds, FieldEntry, HttpOptions, Timestamp};

// ─────────────────────────────────────────────
// SlackLevel
// ─────────────────────────────────────────────

/// Importance level of a Slack message. Drives the default attachment color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SlackLevel {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

// ─────────────────────────────────────────────
// SlackMessage
// ─────────────────────────────────────────────

/// A Slack-compatible webhook message, ready for translation.
#[derive(Clone, Debug, Default)]
pub struct SlackMessage {
    pub level: SlackLevel,
    pub content: Option<String>,
    /// Channel override, e.g. `#alerts`.
    pub channel: Option<String>,
    pub username: Option<String>,
    /// Emoji icon, e.g. `:ghost:`. Emitted as `icon_emoji`.
    pub icon: Option<String>,
    /// Image icon URL. Emitted as `icon_url`.
    pub image: Option<String>,
    pub link_names: Option<bool>,
    pub unfurl_links: Option<bool>,
    pub unfurl_media: Option<bool>,
    pub attachments: Vec<SlackAttachment>,
    pub http: HttpOptions,
}

impl SlackMessage {
    pub fn builder() -> SlackMessageBuilder {
        SlackMessageBuilder::default()
    }

    /// Default attachment color for this message's level.
    pub fn color(&self) -> Option<&'static str> {
        match self.level {
            SlackLevel::Success => Some("good"),
            SlackLevel::Warning => Some("warning"),
            SlackLevel::Error => Some("danger"),
            SlackLevel::Info => None,
        }
    }
}

/// Fluent builder for [`SlackMessage`].
#[derive(Clone, Debug, Default)]
pub struct SlackMessageBuilder {
    message: SlackMessage,
}

impl SlackMessageBuilder {
    pub fn info(mut self) -> Self {
        self.message.level = SlackLevel::Info;
        self
    }

    pub fn success(mut self) -> Self {
        self.message.level = SlackLevel::Success;
        self
    }

    pub fn warning(mut self) -> Self {
        self.message.level = SlackLevel::Warning;
        self
    }

    pub fn error(mut self) -> Self {
        self.message.level = SlackLevel::Error;
        self
    }

    /// Set the sender's name and, optionally, an emoji icon.
    pub fn from(mut self, username: impl Into<String>, icon: Option<&str>) -> Self {
        self.message.username = Some(username.into());
        if let Some(icon) = icon {
            self.message.icon = Some(icon.to_string());
        }
        self
    }

    /// Use an image URL as the sender icon.
    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.message.image = Some(image.into());
        self
    }

    /// Post into a specific channel instead of the webhook default.
    pub fn to(mut self, channel: impl Into<String>) -> Self {
        self.message.channel = Some(channel.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.message.content = Some(content.into());
        self
    }

    /// Append an attachment, configured by `configure`.
    pub fn attachment<F>(mut self, configure: F) -> Self
    where
        F: FnOnce(AttachmentBuilder) -> AttachmentBuilder,
    {
        let attachment = configure(SlackAttachment::builder()).build();
        self.message.attachments.push(attachment);
        self
    }

    /// Find and link channel names and usernames.
    pub fn link_names(mut self) -> Self {
        self.message.link_names = Some(true);
        self
    }

    pub fn unfurl_links(mut self, unfurl: bool) -> Self {
        self.message.unfurl_links = Some(unfurl);
        self
    }

    pub fn unfurl_media(mut self, unfurl: bool) -> Self {
        self.message.unfurl_media = Some(unfurl);
        self
    }

    /// Set additional request options for the HTTP transport.
    pub fn http(mut self, options: HttpOptions) -> Self {
        self.message.http = options;
        self
    }

    pub fn build(self) -> SlackMessage {
        self.message
    }
}

// ─────────────────────────────────────────────
// SlackAttachment
// ─────────────────────────────────────────────

/// A button action on an attachment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlackAction {
    pub text: String,
    pub url: String,
    /// `""`, `"primary"` or `"danger"`.
    pub style: String,
}

/// Slack attachment — structured rich content inside a message.
#[derive(Clone, Debug, Default)]
pub struct SlackAttachment {
    pub title: Option<String>,
    /// Title link. Emitted as `title_link`.
    pub url: Option<String>,
    pub pretext: Option<String>,
    /// Body text. Emitted as `text`.
    pub content: Option<String>,
    pub fallback: Option<String>,
    pub color: Option<String>,
    pub fields: Vec<FieldEntry<SlackAttachmentField>>,
    /// Names of the attributes Slack should render as markdown.
    pub markdown: Vec<String>,
    pub image_url: Option<String>,
    pub thumb_url: Option<String>,
    pub actions: Vec<SlackAction>,
    pub author_name: Option<String>,
    pub author_link: Option<String>,
    pub author_icon: Option<String>,
    pub footer: Option<String>,
    pub footer_icon: Option<String>,
    /// Unwrapped to epoch seconds at translation time.
    pub timestamp: Option<Timestamp>,
}

impl SlackAttachment {
    pub fn builder() -> AttachmentBuilder {
        AttachmentBuilder::default()
    }
}

/// Fluent builder for [`SlackAttachment`].
#[derive(Clone, Debug, Default)]
pub struct AttachmentBuilder {
    attachment: SlackAttachment,
}

impl AttachmentBuilder {
    /// Set the title and, optionally, the URL it links to.
    pub fn title(mut self, title: impl Into<String>, url: Option<&str>) -> Self {
        self.attachment.title = Some(title.into());
        self.attachment.url = url.map(str::to_string);
        self
    }

    pub fn pretext(mut self, pretext: impl Into<String>) -> Self {
        self.attachment.pretext = Some(pretext.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.attachment.content = Some(content.into());
        self
    }

    /// Plain-text summary for clients that cannot render attachments.
    pub fn fallback(mut self, fallback: impl Into<String>) -> Self {
        self.attachment.fallback = Some(fallback.into());
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.attachment.color = Some(color.into());
        self
    }

    /// Append a structured field.
    pub fn field(mut self, field: SlackAttachmentField) -> Self {
        self.attachment.fields.push(FieldEntry::Structured(field));
        self
    }

    /// Append shorthand `(title, value)` pairs; each renders short.
    pub fn fields<I, K, V>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.attachment.fields.extend(pairs(entries));
        self
    }

    /// Attributes to format as markdown, e.g. `["text", "pretext"]`.
    pub fn markdown<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attachment.markdown = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn image(mut self, url: impl Into<String>) -> Self {
        self.attachment.image_url = Some(url.into());
        self
    }

    pub fn thumb(mut self, url: impl Into<String>) -> Self {
        self.attachment.thumb_url = Some(url.into());
        self
    }

    /// Append a link button.
    pub fn action(
        mut self,
        title: impl Into<String>,
        url: impl Into<String>,
        style: impl Into<String>,
    ) -> Self {
        self.attachment.actions.push(SlackAction {
            text: title.into(),
            url: url.into(),
            style: style.into(),
        });
        self
    }

    pub fn author(
        mut self,
        name: impl Into<String>,
        link: Option<&str>,
        icon: Option<&str>,
    ) -> Self {
        self.attachment.author_name = Some(name.into());
        self.attachment.author_link = link.map(str::to_string);
        self.attachment.author_icon = icon.map(str::to_string);
        self
    }

    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.attachment.footer = Some(footer.into());
        self
    }

    pub fn footer_icon(mut self, icon: impl Into<String>) -> Self {
        self.attachment.footer_icon = Some(icon.into());
        self
    }

    /// Set the attachment time. Any [`EpochSeconds`] value is accepted.
    pub fn timestamp<T>(mut self, timestamp: T) -> Self
    where
        T: EpochSeconds + Send + Sync + 'static,
    {
        self.attachment.timestamp = Some(Timestamp::new(timestamp));
        self
    }

    pub fn build(self) -> SlackAttachment {
        self.attachment
    }
}

// ─────────────────────────────────────────────
// SlackAttachmentField
// ─────────────────────────────────────────────

/// A structured attachment field. Emitted as `{title, value, short}`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlackAttachmentField {
    pub title: String,
    pub value: String,
    pub short: bool,
}

impl SlackAttachmentField {
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            short: true,
        }
    }

    /// Render the field full-width.
    pub fn long(mut self) -> Self {
        self.short = false;
        self
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_colors() {
        assert_eq!(SlackMessage::builder().build().color(), None);
        assert_eq!(SlackMessage::builder().success().build().color(), Some("good"));
        assert_eq!(SlackMessage::builder().warning().build().color(), Some("warning"));
        assert_eq!(SlackMessage::builder().error().build().color(), Some("danger"));
        assert_eq!(SlackMessage::builder().error().info().build().color(), None);
    }

    #[test]
    fn test_from_and_to() {
        let msg = SlackMessage::builder()
            .from("Ghostbot", Some(":ghost:"))
            .to("#ghost-talk")
            .build();
        assert_eq!(msg.username.as_deref(), Some("Ghostbot"));
        assert_eq!(msg.icon.as_deref(), Some(":ghost:"));
        assert_eq!(msg.channel.as_deref(), Some("#ghost-talk"));
        assert!(msg.image.is_none());
    }

    #[test]
    fn test_link_names_and_unfurl() {
        let msg = SlackMessage::builder()
            .link_names()
            .unfurl_links(false)
            .unfurl_media(true)
            .build();
        assert_eq!(msg.link_names, Some(true));
        assert_eq!(msg.unfurl_links, Some(false));
        assert_eq!(msg.unfurl_media, Some(true));
    }

    #[test]
    fn test_field_defaults_short() {
        let field = SlackAttachmentField::new("Project", "Hookcord");
        assert!(field.short);
        assert!(!field.long().short);
    }

    #[test]
    fn test_attachment_builder() {
        let attachment = SlackAttachment::builder()
            .title("Release", Some("https://example.com"))
            .fields([("Version", "1.0")])
            .field(SlackAttachmentField::new("Notes", "long text").long())
            .markdown(["text"])
            .action("Open", "https://example.com/open", "primary")
            .author("Author", None, Some("https://example.com/a.png"))
            .timestamp(1_234_567_890i64)
            .build();

        assert_eq!(attachment.url.as_deref(), Some("https://example.com"));
        assert_eq!(attachment.fields.len(), 2);
        assert_eq!(attachment.fields[0], FieldEntry::pair("Version", "1.0"));
        assert_eq!(attachment.markdown, vec!["text".to_string()]);
        assert_eq!(attachment.actions[0].style, "primary");
        assert!(attachment.author_link.is_none());
        assert_eq!(
            attachment.timestamp.as_ref().map(Timestamp::epoch_seconds),
            Some(1_234_567_890)
        );
    }

    #[test]
    fn test_attachments_append_in_order() {
        let msg = SlackMessage::builder()
            .attachment(|a| a.title("first", None))
            .attachment(|a| a.title("second", None))
            .build();
        assert_eq!(msg.attachments[0].title.as_deref(), Some("first"));
        assert_eq!(msg.attachments[1].title.as_deref(), Some("second"));
    }
}

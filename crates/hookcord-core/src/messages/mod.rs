//! Message builders.
//!
//! Two independent shapes are supported:
//! - [`discord`] — Discord-native messages with embeds
//! - [`slack`] — Slack-compatible messages with attachments, posted to the
//!   webhook's `/slack` endpoint
//!
//! Builders are consuming (`fn x(mut self, ..) -> Self`) and finish with
//! `build()`, which hands back an owned value object.

pub mod discord;
pub mod slack;
pub mod timestamp;

use serde_json::{Map, Value};

pub use discord::{DiscordEmbed, DiscordMessage, DiscordMessageBuilder, EmbedBuilder, EmbedField};
pub use slack::{
    AttachmentBuilder, SlackAction, SlackAttachment, SlackAttachmentField, SlackLevel,
    SlackMessage, SlackMessageBuilder,
};
pub use timestamp::{EpochSeconds, Timestamp};

/// Passthrough transport options, opaque to the translator.
pub type HttpOptions = Map<String, Value>;

/// One entry in an embed's or attachment's field list.
///
/// Shorthand pairs and structured fields can be mixed freely; the list keeps
/// insertion order.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldEntry<F> {
    /// Plain key/value pair. Rendered inline/short by default.
    Pair { name: String, value: String },
    /// Fully specified field record.
    Structured(F),
}

impl<F> FieldEntry<F> {
    pub fn pair(name: impl Into<String>, value: impl Into<String>) -> Self {
        FieldEntry::Pair {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Collect a shorthand `(name, value)` iterator into field entries.
pub(crate) fn pairs<F, I, K, V>(entries: I) -> impl Iterator<Item = FieldEntry<F>>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    entries
        .into_iter()
        .map(|(name, value)| FieldEntry::pair(name, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairs_keep_order() {
        let entries: Vec<FieldEntry<EmbedField>> =
            pairs(vec![("b", "2"), ("a", "1"), ("c", "3")]).collect();
        let names: Vec<&str> = entries
            .iter()
            .map(|e| match e {
                FieldEntry::Pair { name, .. } => name.as_str(),
                FieldEntry::Structured(f) => f.name.as_str(),
            })
            .collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }
}

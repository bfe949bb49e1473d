//! Payload translation — built messages → webhook JSON bodies.
//!
//! Both translators follow the same recipe: the always-present keys form the
//! base object, every optional key goes into a candidate map, falsy
//! candidates are dropped, and what remains is merged into the base.
//!
//! Translation never fails. Missing data yields absent or empty keys.

mod discord;
mod slack;

use serde_json::{Map, Value};

use crate::messages::HttpOptions;

pub use discord::build_discord_payload;
pub use slack::build_slack_payload;

/// A translated request: the JSON body plus passthrough transport options.
#[derive(Clone, Debug, PartialEq)]
pub struct WebhookRequest {
    /// The webhook body.
    pub json: Value,
    /// Caller-supplied transport options, copied from the message.
    pub options: HttpOptions,
}

impl WebhookRequest {
    /// Flatten into `{ "json": <body>, ...options }`.
    ///
    /// Options are merged last, so an option named `json` replaces the body.
    pub fn into_value(self) -> Value {
        let mut request = Map::new();
        request.insert("json".into(), self.json);
        for (key, value) in self.options {
            request.insert(key, value);
        }
        Value::Object(request)
    }
}

/// Whether a JSON value counts as "unset" for optional-key filtering.
///
/// Falsy: `null`, `false`, numeric zero, `""`, `"0"`, `[]` and `{}`.
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty() || s == "0",
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

/// Candidate map of optional keys.
///
/// Backed by `serde_json::Map`, so emitted keys come out sorted by name.
#[derive(Default)]
pub(crate) struct Optional(Map<String, Value>);

impl Optional {
    pub(crate) fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    /// Drop falsy candidates and merge the survivors into `base`.
    pub(crate) fn merge_into(self, base: &mut Map<String, Value>) {
        for (key, value) in self.0 {
            if !is_falsy(&value) {
                base.insert(key, value);
            }
        }
    }

    /// Drop falsy candidates and return the survivors as an object.
    pub(crate) fn into_object(self) -> Value {
        let mut object = Map::new();
        self.merge_into(&mut object);
        Value::Object(object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_falsy() {
        for v in [
            json!(null),
            json!(false),
            json!(0),
            json!(0.0),
            json!(""),
            json!("0"),
            json!([]),
            json!({}),
        ] {
            assert!(is_falsy(&v), "{v} should be falsy");
        }
        for v in [
            json!(true),
            json!(1),
            json!(-1),
            json!("false"),
            json!("00"),
            json!([0]),
            json!({ "a": null }),
        ] {
            assert!(!is_falsy(&v), "{v} should be truthy");
        }
    }

    #[test]
    fn test_optional_filters_before_merge() {
        let mut base = Map::new();
        base.insert("content".into(), json!("hi"));

        Optional::default()
            .with("username", Option::<String>::None)
            .with("tts", false)
            .with("avatar_url", "https://example.com/a.png")
            .merge_into(&mut base);

        assert_eq!(
            Value::Object(base),
            json!({ "content": "hi", "avatar_url": "https://example.com/a.png" })
        );
    }

    #[test]
    fn test_into_value_merges_options() {
        let mut options = HttpOptions::new();
        options.insert("timeout".into(), json!(3));
        let request = WebhookRequest {
            json: json!({ "content": "x" }),
            options,
        };
        assert_eq!(
            request.into_value(),
            json!({ "json": { "content": "x" }, "timeout": 3 })
        );
    }

    #[test]
    fn test_into_value_option_overrides_body() {
        let mut options = HttpOptions::new();
        options.insert("json".into(), json!({ "replaced": true }));
        let request = WebhookRequest {
            json: json!({ "content": "x" }),
            options,
        };
        assert_eq!(request.into_value(), json!({ "json": { "replaced": true } }));
    }
}

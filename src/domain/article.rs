//! Article domain model and lenient JSON decoding.
//!
//! An [`Article`] is one record from the external JSON feed. The feed is not
//! under our control, so every field is optional and decoding never fails on a
//! single malformed field: a value of the wrong JSON type is treated exactly
//! like an absent one. Consumers substitute their own display defaults.

use serde::de::Deserializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Tags attached to an article.
///
/// The feed may provide tags either as an array of strings or as a single
/// string. Both forms normalize to the same lower-cased tag set via
/// [`Tags::normalized`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Tags {
    /// `"tags": ["news", "rust"]`
    Many(Vec<String>),
    /// `"tags": "news"`
    One(String),
}

impl Tags {
    /// Returns the tags case-folded to lower case, in feed order.
    #[must_use]
    pub fn normalized(&self) -> Vec<String> {
        match self {
            Self::Many(tags) => tags.iter().map(|t| t.to_lowercase()).collect(),
            Self::One(tag) => vec![tag.to_lowercase()],
        }
    }

    /// Flattens the tags into a single display line.
    ///
    /// Sequences are joined with `", "`; a scalar is shown as-is.
    #[must_use]
    pub fn display_line(&self) -> String {
        match self {
            Self::Many(tags) => tags.join(", "),
            Self::One(tag) => tag.clone(),
        }
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::String(tag) => Some(Self::One(tag)),
            Value::Array(items) => Some(Self::Many(
                items
                    .into_iter()
                    .filter_map(|item| match item {
                        Value::String(tag) => Some(tag),
                        _ => None,
                    })
                    .collect(),
            )),
            _ => None,
        }
    }
}

/// One article from the JSON feed.
///
/// No field is an identifier; articles are distinguished only by position in
/// the loaded list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Free-form date text; never parsed as a calendar date.
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient_tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
}

impl Article {
    /// Decodes one element of the feed array.
    ///
    /// Objects decode field by field. Any other JSON value (a number, a string,
    /// `null`) becomes an article with no fields, so a stray element still
    /// renders as an "untitled" card instead of failing the whole load.
    #[must_use]
    pub fn from_json(value: Value) -> Self {
        if !value.is_object() {
            tracing::debug!(kind = json_kind(&value), "non-object feed element, using empty article");
            return Self::default();
        }
        serde_json::from_value(value).unwrap_or_default()
    }

    /// Returns the case-folded tag set; empty when the article has no tags.
    #[must_use]
    pub fn normalized_tags(&self) -> Vec<String> {
        self.tags.as_ref().map_or_else(Vec::new, Tags::normalized)
    }
}

pub(crate) const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(text) => Ok(Some(text)),
        _ => Ok(None),
    }
}

fn lenient_tags<'de, D>(deserializer: D) -> Result<Option<Tags>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Tags::from_value(Value::deserialize(deserializer)?))
}

//! Tag record and the tag-state parse boundary
//!
//! All defaulting and type coercion for externally supplied tag state happens
//! here, so the merge engine and renderer only ever see well-formed records.

use crate::error::{Result, TrigwordsError};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// An ordered list of tags; insertion order is rendering order
pub type TagList = Vec<Tag>;

/// A single trigger word with its toggle state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    /// The trigger word or phrase
    pub text: String,

    /// Whether this tag contributes to the rendered output
    #[serde(default)]
    pub active: bool,

    /// Optional strength weight; None means unweighted (treated as 1.0)
    #[serde(default, deserialize_with = "coerce_strength")]
    pub strength: Option<f64>,

    /// Provenance label: a preset category name, or a marker for merged tags
    #[serde(default)]
    pub category: String,

    /// UI hint set when a tag arrived via merge; ignored by serialization
    #[serde(default)]
    pub highlighted: bool,
}

impl Tag {
    pub fn new(
        text: impl Into<String>,
        active: bool,
        strength: Option<f64>,
        category: impl Into<String>,
    ) -> Self {
        Tag {
            text: text.into(),
            active,
            strength,
            category: category.into(),
            highlighted: false,
        }
    }

    /// Strength used for formatting decisions; unweighted tags count as 1.0
    pub fn effective_strength(&self) -> f64 {
        self.strength.unwrap_or(1.0)
    }
}

/// Accept a number, a numeric string, or null for strength.
/// Anything that does not parse as a number degrades to None (unweighted).
fn coerce_strength<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    })
}

/// Parse a serialized tag state.
///
/// Accepts either a bare JSON array of tag records, or an object wrapping
/// such an array under a "tags" field. Any other shape, a non-object array
/// element, or a record without 'text' is malformed.
pub fn parse_tag_state(raw: &str) -> Result<TagList> {
    let value: Value =
        serde_json::from_str(raw).map_err(|e| TrigwordsError::MalformedTagState(e.to_string()))?;

    let array = match value {
        array @ Value::Array(_) => array,
        Value::Object(mut map) => match map.remove("tags") {
            Some(tags @ Value::Array(_)) => tags,
            _ => {
                return Err(TrigwordsError::MalformedTagState(
                    "expected an object with a \"tags\" array".to_string(),
                ))
            }
        },
        _ => {
            return Err(TrigwordsError::MalformedTagState(
                "expected a JSON array of tags or an object with a \"tags\" field".to_string(),
            ))
        }
    };

    serde_json::from_value(array).map_err(|e| TrigwordsError::MalformedTagState(e.to_string()))
}

//! Structured-data leak detection and output scrubbing
//!
//! The hidden tag state travels as JSON next to free-text inputs, and a
//! miswired host can feed that JSON into a text channel. Detection is a
//! string heuristic and therefore approximate: a legitimate trigger word that
//! happens to look like a JSON fragment or contain the literal substring
//! `text:` will be scrubbed too. That trade-off is accepted; the output
//! channel must never carry raw internal state.

use regex::Regex;
use std::sync::OnceLock;

/// Field markers that identify the internal tag representation
const STATE_MARKERS: &[&str] = &["\"text\":", "\"active\":", "\"strength\":", "\"category\":"];

/// Literal fragments removed during a scrub, after quote stripping
const SCRUB_FRAGMENTS: &[&str] = &[
    "text:",
    "active:",
    "strength:",
    "category:",
    "highlighted:",
    "true",
    "false",
];

/// Matches text that opens like a JSON object or array and carries a
/// "text" field marker somewhere inside
fn state_fragment_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r#"(?s)^\s*[\[{].*"text"\s*:"#).unwrap())
}

/// Collapses runs of commas (possibly whitespace-separated) into one
fn comma_run_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r",(\s*,)+").unwrap())
}

/// Heuristic: does this text look like a serialized tag state fragment?
pub fn looks_like_tag_state(text: &str) -> bool {
    state_fragment_regex().is_match(text)
}

/// Does assembled output still contain internal field markers?
pub fn contains_state_markers(text: &str) -> bool {
    STATE_MARKERS.iter().any(|marker| text.contains(marker))
}

/// Repair an output string that leaked internal state.
///
/// Strips structural characters, removes the internal field names and
/// boolean literals, collapses the comma runs left behind, and trims
/// leading/trailing commas and whitespace.
pub fn scrub(text: &str) -> String {
    let mut cleaned: String = text
        .chars()
        .filter(|c| !matches!(c, '{' | '}' | '[' | ']' | '"' | '\\'))
        .collect();

    for fragment in SCRUB_FRAGMENTS {
        cleaned = cleaned.replace(fragment, "");
    }

    let collapsed = comma_run_regex().replace_all(&cleaned, ",");

    collapsed
        .trim_matches(|c: char| c == ',' || c.is_whitespace())
        .to_string()
}

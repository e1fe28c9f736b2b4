//! Merge and deduplication use cases over serialized tag lists
//!
//! The CLI boundary works in serialized form; parsing failures here are
//! fatal because the whole job of these commands is transforming the state.

use crate::domain::tag::parse_tag_state;
use crate::domain::{MergeStrategy, TagMerger};
use crate::error::Result;

/// Service for merging and deduplicating serialized tag lists
pub struct MergeTagsService;

impl MergeTagsService {
    /// Merge two serialized tag lists, returning the merged list as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if either input is not a well-formed tag state.
    pub fn merge(preset_json: &str, incoming_json: &str, strategy: MergeStrategy) -> Result<String> {
        let preset = parse_tag_state(preset_json)?;
        let incoming = parse_tag_state(incoming_json)?;
        let merged = TagMerger::merge(&preset, &incoming, strategy);
        Ok(serde_json::to_string_pretty(&merged)?)
    }

    /// Deduplicate a serialized tag list, returning the result as JSON.
    pub fn deduplicate(tags_json: &str, case_sensitive: bool) -> Result<String> {
        let tags = parse_tag_state(tags_json)?;
        let deduped = TagMerger::deduplicate(&tags, case_sensitive);
        Ok(serde_json::to_string_pretty(&deduped)?)
    }
}

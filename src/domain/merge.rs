//! Tag merge engine - duplicate resolution between tag sources

use super::tag::{Tag, TagList};
use crate::error::{Result, TrigwordsError};
use std::collections::HashMap;
use std::str::FromStr;

/// How to resolve a duplicate between a preset tag and an incoming tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergeStrategy {
    /// Keep both copies, mark the incoming one as highlighted
    #[default]
    KeepBoth,
    /// Keep the preset version, discard the incoming duplicate
    PreferPreset,
    /// Replace the preset version in place with the incoming one
    PreferIncoming,
}

impl FromStr for MergeStrategy {
    type Err = TrigwordsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "keep-both" => Ok(MergeStrategy::KeepBoth),
            "prefer-preset" => Ok(MergeStrategy::PreferPreset),
            "prefer-incoming" => Ok(MergeStrategy::PreferIncoming),
            _ => Err(TrigwordsError::Config(format!(
                "Invalid merge strategy: {}",
                s
            ))),
        }
    }
}

impl std::fmt::Display for MergeStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MergeStrategy::KeepBoth => write!(f, "keep-both"),
            MergeStrategy::PreferPreset => write!(f, "prefer-preset"),
            MergeStrategy::PreferIncoming => write!(f, "prefer-incoming"),
        }
    }
}

/// Case-insensitive, whitespace-trimmed duplicate key
fn normalized_key(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Merge and deduplication over tag lists
pub struct TagMerger;

impl TagMerger {
    /// Merge preset tags with incoming tags (e.g. from another node).
    ///
    /// Neither input is mutated; the result is a fresh list. Preset entries
    /// come first in their original order (possibly replaced in place), then
    /// newly appended incoming entries in their original relative order.
    /// Incoming tags that were not already present are marked highlighted so
    /// the host can surface them.
    ///
    /// # Examples
    ///
    /// ```
    /// use trigwords::domain::{MergeStrategy, Tag, TagMerger};
    ///
    /// let preset = vec![Tag::new("masterpiece", true, None, "Pos: Quality")];
    /// let incoming = vec![Tag::new("detailed", true, None, "external")];
    /// let merged = TagMerger::merge(&preset, &incoming, MergeStrategy::KeepBoth);
    /// assert_eq!(merged.len(), 2);
    /// assert!(merged[1].highlighted);
    /// ```
    pub fn merge(preset: &[Tag], incoming: &[Tag], strategy: MergeStrategy) -> TagList {
        // Degenerate cases: no duplicates possible, no strategy applied
        if incoming.is_empty() {
            return preset.to_vec();
        }
        if preset.is_empty() {
            return incoming.to_vec();
        }

        // Index preset positions by normalized text for O(1) duplicate lookup
        let preset_index: HashMap<String, usize> = preset
            .iter()
            .enumerate()
            .map(|(i, tag)| (normalized_key(&tag.text), i))
            .collect();

        let mut result = preset.to_vec();

        for tag in incoming {
            match preset_index.get(&normalized_key(&tag.text)) {
                None => {
                    let mut added = tag.clone();
                    added.highlighted = true;
                    result.push(added);
                }
                Some(&idx) => match strategy {
                    MergeStrategy::KeepBoth => {
                        let mut added = tag.clone();
                        added.highlighted = true;
                        result.push(added);
                    }
                    MergeStrategy::PreferIncoming => {
                        result[idx] = tag.clone();
                    }
                    MergeStrategy::PreferPreset => {}
                },
            }
        }

        result
    }

    /// Remove duplicate tags, keeping the first occurrence per key.
    ///
    /// Keys are lowercased and trimmed unless `case_sensitive`, in which case
    /// the raw text is compared. Later duplicates are dropped whole; their
    /// fields are not merged into the survivor.
    pub fn deduplicate(tags: &[Tag], case_sensitive: bool) -> TagList {
        let mut seen = std::collections::HashSet::new();
        let mut result = Vec::new();

        for tag in tags {
            let key = if case_sensitive {
                tag.text.clone()
            } else {
                normalized_key(&tag.text)
            };
            if seen.insert(key) {
                result.push(tag.clone());
            }
        }

        result
    }
}

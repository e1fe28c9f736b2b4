//! trigwords - Trigger word tag management for image-generation prompts
//!
//! Manages lists of short text tags (trigger words), toggling each on/off
//! with optional strength weights, merging duplicate entries from multiple
//! sources, and serializing the active subset into one comma/space-joined
//! prompt string. The output channel is guarded against accidental leakage
//! of the internal JSON tag representation.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::TrigwordsError;

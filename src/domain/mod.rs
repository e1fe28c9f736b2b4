//! Domain layer - tag model and pure transformation logic

pub mod catalog;
pub mod leak;
pub mod merge;
pub mod render;
pub mod tag;

pub use catalog::{Category, PresetCatalog};
pub use merge::{MergeStrategy, TagMerger};
pub use render::{RenderOptions, RenderedPrompt, TagRenderer};
pub use tag::{parse_tag_state, Tag, TagList};

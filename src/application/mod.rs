//! Application layer - use cases and orchestration

pub mod fingerprint;
pub mod merge_tags;
pub mod render_prompt;

pub use fingerprint::change_token;
pub use merge_tags::MergeTagsService;
pub use render_prompt::{RenderOutcome, RenderPromptService, RenderRequest};

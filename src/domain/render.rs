//! Active-tag renderer - assembles the final prompt string
//!
//! Pure over its inputs: the tag list is read, never mutated, and the same
//! inputs always produce the same output.

use super::leak;
use super::tag::Tag;
use tracing::error;

/// Strength weights closer to 1.0 than this are treated as unweighted,
/// so floating-point roundoff never produces noisy (word:1.00) syntax
pub const STRENGTH_EPSILON: f64 = 0.001;

/// Side inputs for a render call
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Emit (word:1.2) strength syntax for weighted tags
    pub strength_adjustment: bool,

    /// Free-text prefix placed before everything else
    pub prefix: Option<String>,

    /// Externally generated syntax fragment, e.g. <lora:name:0.8>
    pub lora_syntax: Option<String>,
}

/// Result of a render call
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPrompt {
    /// The assembled, scrubbed output string
    pub text: String,

    /// How many active tags contributed to the output
    pub active_count: usize,
}

/// Renderer over a tag list
pub struct TagRenderer;

impl TagRenderer {
    /// Render the active subset of a tag list into one prompt string.
    ///
    /// Inactive, empty, and state-fragment-looking tags are skipped. The
    /// prefix and lora fragment are free-text side channels and are blanked
    /// if they look like leaked tag state. Output order is prefix, fragment,
    /// then the comma-joined active tags.
    pub fn render(tags: &[Tag], options: &RenderOptions) -> RenderedPrompt {
        let prefix = guarded_side_input(options.prefix.as_deref(), "prefix");
        let lora_syntax = guarded_side_input(options.lora_syntax.as_deref(), "lora_syntax");

        let mut active_tags: Vec<String> = Vec::new();
        for tag in tags {
            if !tag.active {
                continue;
            }
            let text = tag.text.trim();
            if text.is_empty() || leak::looks_like_tag_state(text) {
                continue;
            }

            let strength = tag.effective_strength();
            if options.strength_adjustment && (strength - 1.0).abs() > STRENGTH_EPSILON {
                active_tags.push(format!("({}:{:.2})", text, strength));
            } else {
                active_tags.push(text.to_string());
            }
        }

        let active_count = active_tags.len();

        let mut output_parts: Vec<String> = Vec::new();
        if !prefix.is_empty() {
            output_parts.push(prefix);
        }
        if !lora_syntax.is_empty() {
            output_parts.push(lora_syntax);
        }
        if !active_tags.is_empty() {
            output_parts.push(active_tags.join(", "));
        }

        let mut text = output_parts.join(" ");

        if leak::contains_state_markers(&text) {
            error!("internal tag state leaked into rendered output, scrubbing");
            text = leak::scrub(&text);
        }

        RenderedPrompt { text, active_count }
    }
}

/// Trim a free-text side input, blanking it if it looks like leaked state
fn guarded_side_input(value: Option<&str>, channel: &str) -> String {
    let trimmed = value.unwrap_or("").trim();
    if leak::looks_like_tag_state(trimmed) {
        error!("{} carried serialized tag state, blanking it", channel);
        String::new()
    } else {
        trimmed.to_string()
    }
}

//! Change-detection token for render requests
//!
//! The host re-runs the renderer only when this token changes, so it must be
//! a deterministic function of exactly the render inputs and nothing else.

use super::render_prompt::RenderRequest;
use sha2::{Digest, Sha256};

/// Compute the change-detection token for a render request.
///
/// SHA-256 over the tuple (category, default_active,
/// allow_strength_adjustment, tag state, prefix, lora syntax). Each field is
/// length-prefixed before hashing so field boundaries stay unambiguous, then
/// the digest is hex-encoded.
pub fn change_token(request: &RenderRequest) -> String {
    let fields = [
        request.category.as_str(),
        bool_field(request.default_active),
        bool_field(request.allow_strength_adjustment),
        request.tag_state.as_deref().unwrap_or(""),
        request.prefix.as_deref().unwrap_or(""),
        request.lora_syntax.as_deref().unwrap_or(""),
    ];

    let mut hasher = Sha256::new();
    for field in fields {
        hasher.update((field.len() as u64).to_be_bytes());
        hasher.update(field.as_bytes());
    }

    hasher
        .finalize()
        .iter()
        .map(|byte| format!("{:02x}", byte))
        .collect()
}

fn bool_field(value: bool) -> &'static str {
    if value {
        "1"
    } else {
        "0"
    }
}

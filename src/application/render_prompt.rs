//! Prompt rendering use case
//!
//! Orchestrates the full workflow: category validation, tag source
//! resolution (saved state or preset fallback), rendering, and the
//! swallow-all boundary that turns internal failures into an explicit
//! empty-output result instead of a propagated fault.

use crate::domain::tag::parse_tag_state;
use crate::domain::{PresetCatalog, RenderOptions, TagList, TagRenderer};
use crate::error::{Result, TrigwordsError};
use tracing::{error, info, warn};

/// Inputs supplied by the host for one render call
#[derive(Debug, Clone)]
pub struct RenderRequest {
    /// Preset category selector (validated against the catalog)
    pub category: String,

    /// Active state applied to freshly loaded preset tags
    pub default_active: bool,

    /// Emit (word:1.2) strength syntax for weighted tags
    pub allow_strength_adjustment: bool,

    /// Serialized tag state from the host, if any
    pub tag_state: Option<String>,

    /// Free-text prefix placed before everything else
    pub prefix: Option<String>,

    /// Externally generated syntax fragment, e.g. <lora:name:0.8>
    pub lora_syntax: Option<String>,
}

/// Outcome of a render call; internal failures yield an empty output
/// rather than an error
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOutcome {
    /// The assembled output string (empty on internal failure)
    pub output: String,

    /// Number of active tags that contributed to the output
    pub active_count: usize,

    /// Whether the tag source fell back to the preset catalog
    pub used_preset_fallback: bool,
}

impl RenderOutcome {
    fn empty_on_failure() -> Self {
        RenderOutcome {
            output: String::new(),
            active_count: 0,
            used_preset_fallback: false,
        }
    }
}

/// Service for rendering active trigger words
pub struct RenderPromptService {
    catalog: PresetCatalog,
}

impl RenderPromptService {
    /// Create a new render service over the given catalog
    pub fn new(catalog: PresetCatalog) -> Self {
        RenderPromptService { catalog }
    }

    /// Execute a render request.
    ///
    /// # Errors
    ///
    /// Returns an error only for an invalid category, which is rejected at
    /// the validation boundary before any processing. Every other failure is
    /// converted into an empty `RenderOutcome` and logged; the renderer never
    /// aborts the caller.
    pub fn execute(&self, request: &RenderRequest) -> Result<RenderOutcome> {
        if !self.catalog.is_valid_category(&request.category) {
            return Err(TrigwordsError::InvalidCategory {
                value: request.category.clone(),
                valid: self.catalog.category_names(),
            });
        }

        match self.render_inner(request) {
            Ok(outcome) => Ok(outcome),
            Err(e) => {
                error!("render failed, returning empty output: {}", e);
                Ok(RenderOutcome::empty_on_failure())
            }
        }
    }

    fn render_inner(&self, request: &RenderRequest) -> Result<RenderOutcome> {
        let (tags, used_preset_fallback) = self.resolve_tag_source(request);

        let options = RenderOptions {
            strength_adjustment: request.allow_strength_adjustment,
            prefix: request.prefix.clone(),
            lora_syntax: request.lora_syntax.clone(),
        };

        let rendered = TagRenderer::render(&tags, &options);
        info!("rendered {} active trigger words", rendered.active_count);

        Ok(RenderOutcome {
            output: rendered.text,
            active_count: rendered.active_count,
            used_preset_fallback,
        })
    }

    /// Use the saved tag state when present and well-formed; otherwise fall
    /// back to a fresh preset load for the requested category.
    fn resolve_tag_source(&self, request: &RenderRequest) -> (TagList, bool) {
        let raw = request
            .tag_state
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty());

        if let Some(raw) = raw {
            match parse_tag_state(raw) {
                Ok(tags) => return (tags, false),
                Err(e) => {
                    warn!("malformed tag state, falling back to presets: {}", e);
                }
            }
        }

        let tags =
            self.catalog
                .preset_tags(&request.category, request.default_active, None);
        (tags, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(category: &str) -> RenderRequest {
        RenderRequest {
            category: category.to_string(),
            default_active: true,
            allow_strength_adjustment: false,
            tag_state: None,
            prefix: None,
            lora_syntax: None,
        }
    }

    fn service() -> RenderPromptService {
        RenderPromptService::new(PresetCatalog::builtin())
    }

    #[test]
    fn test_invalid_category_rejected() {
        let result = service().execute(&request("Nonexistent"));
        match result {
            Err(TrigwordsError::InvalidCategory { value, valid }) => {
                assert_eq!(value, "Nonexistent");
                assert!(valid.contains(&"All".to_string()));
            }
            other => panic!("expected InvalidCategory, got {:?}", other),
        }
    }

    #[test]
    fn test_initial_preset_end_to_end() {
        let outcome = service().execute(&request("Initial")).unwrap();
        assert!(outcome.used_preset_fallback);
        assert_eq!(outcome.active_count, 36);
        assert!(outcome.output.starts_with("masterpiece, best quality"));
        assert!(outcome.output.ends_with("bird's eye view"));
        assert!(!outcome.output.contains("volumetric lighting"));
    }

    #[test]
    fn test_saved_state_preferred_over_presets() {
        let mut req = request("All");
        req.tag_state = Some(
            r#"{"tags":[
                {"text":"masterpiece","active":true,"strength":1.0,"category":"Pos: Quality","highlighted":false},
                {"text":"blurry","active":false}
            ]}"#
            .to_string(),
        );
        let outcome = service().execute(&req).unwrap();
        assert!(!outcome.used_preset_fallback);
        assert_eq!(outcome.output, "masterpiece");
        assert_eq!(outcome.active_count, 1);
    }

    #[test]
    fn test_malformed_state_falls_back_to_presets() {
        let mut req = request("Pos: Motion");
        req.tag_state = Some("{not valid json".to_string());
        let outcome = service().execute(&req).unwrap();
        assert!(outcome.used_preset_fallback);
        assert_eq!(outcome.active_count, 8);
    }

    #[test]
    fn test_empty_state_falls_back_to_presets() {
        let mut req = request("Pos: Motion");
        req.tag_state = Some("   ".to_string());
        let outcome = service().execute(&req).unwrap();
        assert!(outcome.used_preset_fallback);
    }

    #[test]
    fn test_default_active_false_renders_nothing() {
        let mut req = request("Initial");
        req.default_active = false;
        let outcome = service().execute(&req).unwrap();
        assert_eq!(outcome.output, "");
        assert_eq!(outcome.active_count, 0);
    }

    #[test]
    fn test_prefix_and_lora_pass_through() {
        let mut req = request("All");
        req.tag_state =
            Some(r#"[{"text": "detailed", "active": true}]"#.to_string());
        req.prefix = Some("a good photo".to_string());
        req.lora_syntax = Some("<lora:x:0.8>".to_string());
        let outcome = service().execute(&req).unwrap();
        assert_eq!(outcome.output, "a good photo <lora:x:0.8> detailed");
    }

    #[test]
    fn test_execute_is_idempotent() {
        let mut req = request("Initial");
        req.allow_strength_adjustment = true;
        let first = service().execute(&req).unwrap();
        let second = service().execute(&req).unwrap();
        assert_eq!(first, second);
    }
}

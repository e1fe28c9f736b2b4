//! Preset catalog - categorized trigger word tables and lookup helpers
//!
//! The catalog is an immutable value injected into the services that need it,
//! so alternate tables (e.g. loaded from a TOML file) can stand in for the
//! builtin one in tests and at the CLI.

use super::tag::{Tag, TagList};

/// Synthetic selector meaning "every known category"
pub const SELECT_ALL: &str = "All";

/// Synthetic selector meaning "the curated starter subset"
pub const SELECT_INITIAL: &str = "Initial";

// --- Positive tags ---

const QUALITY_TAGS: &[&str] = &[
    "masterpiece",
    "best quality",
    "very aesthetic",
    "absurdres",
    "high quality",
    "ultra high definition",
    "extremely high detail",
    "newest",
    "year 2024",
    "year 2025",
    "highres",
    "8K",
    "HDR",
    "score_9",
    "score_8_up",
    "score_7_up",
];

const COMPOSITION_TAGS: &[&str] = &[
    "dynamic angle",
    "dynamic pose",
    "low-angle shot",
    "low angle",
    "looking at viewer",
    "from above",
    "from below",
    "upper body focus",
    "full body",
    "portrait",
    "close-up shot",
    "mid shot",
    "cowboy shot",
    "wide angle",
    "cinematic field of view",
    "perfect composition",
    "rule of thirds",
    "symmetrical",
    "asymmetrical",
    "bird's eye view",
];

const LIGHTING_TAGS: &[&str] = &[
    "volumetric lighting",
    "ambient occlusion",
    "dramatic lighting",
    "cinematic lighting",
    "rim light",
    "soft lighting",
    "studio lighting",
    "golden hour lighting",
    "natural lighting",
    "sunlight",
    "backlighting",
    "sharp focus",
    "glowing",
    "luminescent background",
    "bioluminescence",
    "ray tracing",
    "reflection",
];

const STYLE_TAGS: &[&str] = &[
    "anime illustration",
    "semi-realistic anime illustration",
    "digital painting",
    "cel shading",
    "clean linework",
    "manga style lineart",
    "detailed",
    "highly detailed",
    "intricate details",
    "painterly",
    "flat color",
    "vibrant colors",
    "muted colors",
    "watercolor",
    "sketchy",
];

const DETAIL_TAGS: &[&str] = &[
    "detailed eyes",
    "beautiful eye details",
    "detailed skin features",
    "floating hair",
    "flowing hair",
    "intricate details",
    "excellent depth of field",
    "reflections",
    "glossy",
    "textured",
    "highly detailed background",
];

const AESTHETIC_TAGS: &[&str] = &[
    "eye-catching",
    "beautiful",
    "vivid colors",
    "bright colors",
    "vibrant",
    "high contrast",
    "extreme contrast",
    "balanced colors",
    "atmospheric",
    "depth of field",
    "atmospheric perspective",
    "elegant",
    "stylish",
];

const MOTION_TAGS: &[&str] = &[
    "dynamic movement",
    "motion lines",
    "foreshortening",
    "wind",
    "floating",
    "flowing",
    "action pose",
    "speed lines",
];

const POSES_TAGS: &[&str] = &[
    "standing",
    "sitting",
    "lying",
    "squatting",
    "kneeling",
    "dynamic pose",
    "fighting stance",
    "crossed arms",
    "hand on hip",
    "peace sign",
    "holding object",
    "hands behind back",
    "stretching",
    "leaning",
    "jumping",
    "running",
    "crouching",
];

const EXPRESSIONS_TAGS: &[&str] = &[
    "smile",
    "grin",
    "laughing",
    "angry",
    "sad",
    "crying",
    "surprised",
    "neutral",
    "seductive",
    "wink",
    "tongue out",
    "blush",
    "pout",
    "closed eyes",
    "looking away",
    "smirk",
    "embarrassed",
    "frown",
    "scared",
];

// --- Negative tags ---

const QUALITY_NEG_TAGS: &[&str] = &[
    "worst quality",
    "low quality",
    "normal quality",
    "jpeg artifacts",
    "lowres",
    "blurry",
    "pixelated",
    "distorted",
    "low resolution",
];

const ANATOMY_NEG_TAGS: &[&str] = &[
    "bad anatomy",
    "bad hands",
    "missing fingers",
    "extra digit",
    "fewer digits",
    "extra limbs",
    "extra arms",
    "extra legs",
    "malformed limbs",
    "mutated hands",
    "mutated",
    "mutilated",
    "disfigured",
    "long neck",
    "gross proportions",
    "fused fingers",
    "too many fingers",
];

const TECHNICAL_NEG_TAGS: &[&str] = &[
    "watermark",
    "signature",
    "text",
    "error",
    "username",
    "cropped",
    "out of frame",
    "border",
    "caption",
    "copyright",
];

const STYLE_NEG_TAGS: &[&str] = &[
    "sketch",
    "monochrome",
    "grayscale",
    "ugly",
    "duplicate",
    "morbid",
    "mutation",
    "deformed",
    "censored",
    "unbalanced colors",
];

/// Declaration order of the builtin categories is the concatenation order
/// used by the "All" selector.
const BUILTIN_CATEGORIES: &[(&str, &[&str])] = &[
    ("Pos: Quality", QUALITY_TAGS),
    ("Pos: Composition", COMPOSITION_TAGS),
    ("Pos: Lighting", LIGHTING_TAGS),
    ("Pos: Style", STYLE_TAGS),
    ("Pos: Detail", DETAIL_TAGS),
    ("Pos: Aesthetic", AESTHETIC_TAGS),
    ("Pos: Motion", MOTION_TAGS),
    ("Pos: Poses", POSES_TAGS),
    ("Pos: Expressions", EXPRESSIONS_TAGS),
    ("Neg: Quality", QUALITY_NEG_TAGS),
    ("Neg: Anatomy", ANATOMY_NEG_TAGS),
    ("Neg: Technical", TECHNICAL_NEG_TAGS),
    ("Neg: Style", STYLE_NEG_TAGS),
];

/// Legacy category names kept for saved workflows that predate the
/// "Pos:"/"Neg:" split.
const LEGACY_ALIASES: &[(&str, &str)] = &[
    ("Quality", "Pos: Quality"),
    ("Lighting", "Pos: Lighting"),
    ("Composition", "Pos: Composition"),
    ("Style", "Pos: Style"),
    ("Detail", "Pos: Detail"),
    ("Aesthetic", "Pos: Aesthetic"),
    ("Motion", "Pos: Motion"),
];

const INITIAL_CATEGORIES: &[&str] = &["Pos: Quality", "Pos: Composition"];

/// A named category and its member trigger words
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub name: String,
    pub tags: Vec<String>,
}

/// Immutable table of preset categories
#[derive(Debug, Clone)]
pub struct PresetCatalog {
    categories: Vec<Category>,
    aliases: Vec<(String, String)>,
    initial: Vec<String>,
}

impl PresetCatalog {
    /// Build a catalog from explicit parts
    pub fn new(
        categories: Vec<Category>,
        aliases: Vec<(String, String)>,
        initial: Vec<String>,
    ) -> Self {
        PresetCatalog {
            categories,
            aliases,
            initial,
        }
    }

    /// The builtin SDXL Illustrious/Pony preset table
    pub fn builtin() -> Self {
        PresetCatalog {
            categories: BUILTIN_CATEGORIES
                .iter()
                .map(|(name, tags)| Category {
                    name: (*name).to_string(),
                    tags: tags.iter().map(|t| (*t).to_string()).collect(),
                })
                .collect(),
            aliases: LEGACY_ALIASES
                .iter()
                .map(|(from, to)| ((*from).to_string(), (*to).to_string()))
                .collect(),
            initial: INITIAL_CATEGORIES.iter().map(|c| (*c).to_string()).collect(),
        }
    }

    /// All accepted category names, in stable order: the two synthetic
    /// selectors, the concrete categories in declaration order, then the
    /// legacy alias names.
    pub fn category_names(&self) -> Vec<String> {
        let mut names = vec![SELECT_INITIAL.to_string(), SELECT_ALL.to_string()];
        names.extend(self.categories.iter().map(|c| c.name.clone()));
        names.extend(self.aliases.iter().map(|(from, _)| from.clone()));
        names
    }

    /// Whether a name is accepted by `preset_tags`
    pub fn is_valid_category(&self, name: &str) -> bool {
        name == SELECT_ALL
            || name == SELECT_INITIAL
            || self.categories.iter().any(|c| c.name == name)
            || self.aliases.iter().any(|(from, _)| from == name)
    }

    /// Map a legacy alias onto its canonical category name
    pub fn canonical<'a>(&'a self, name: &'a str) -> &'a str {
        self.aliases
            .iter()
            .find(|(from, _)| from == name)
            .map(|(_, to)| to.as_str())
            .unwrap_or(name)
    }

    fn find(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Build a fresh tag list for a category selector.
    ///
    /// "All" concatenates every category in declaration order; "Initial"
    /// concatenates the starter categories; a concrete or legacy name yields
    /// only that category. Unknown names yield an empty list (validation
    /// happens upstream).
    pub fn preset_tags(
        &self,
        category: &str,
        default_active: bool,
        default_strength: Option<f64>,
    ) -> TagList {
        let category = self.canonical(category);

        if category == SELECT_ALL {
            self.categories
                .iter()
                .flat_map(|c| category_tags(c, default_active, default_strength))
                .collect()
        } else if category == SELECT_INITIAL {
            self.initial
                .iter()
                .filter_map(|name| self.find(name))
                .flat_map(|c| category_tags(c, default_active, default_strength))
                .collect()
        } else if let Some(cat) = self.find(category) {
            category_tags(cat, default_active, default_strength)
        } else {
            Vec::new()
        }
    }
}

fn category_tags(
    category: &Category,
    default_active: bool,
    default_strength: Option<f64>,
) -> Vec<Tag> {
    category
        .tags
        .iter()
        .map(|text| {
            Tag::new(
                text.clone(),
                default_active,
                default_strength,
                category.name.as_str(),
            )
        })
        .collect()
}

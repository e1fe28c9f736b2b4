//! Error types for trigwords

use thiserror::Error;

/// Main error type for the trigwords application
#[derive(Debug, Error)]
pub enum TrigwordsError {
    #[error("Invalid preset category: {value}")]
    InvalidCategory { value: String, valid: Vec<String> },

    #[error("Malformed tag state: {0}")]
    MalformedTagState(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),
}

impl TrigwordsError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            TrigwordsError::InvalidCategory { .. } => 2,
            TrigwordsError::MalformedTagState(_) => 3,
            TrigwordsError::Catalog(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            TrigwordsError::InvalidCategory { value, valid } => {
                format!(
                    "Invalid preset category: '{}'\n\n\
                    Valid categories:\n{}\n\n\
                    Suggestions:\n\
                    • Use 'trigwords categories' to list all category names\n\
                    • 'All' loads every category, 'Initial' loads the starter set",
                    value,
                    valid
                        .iter()
                        .map(|c| format!("  • {}", c))
                        .collect::<Vec<_>>()
                        .join("\n")
                )
            }
            TrigwordsError::MalformedTagState(msg) => {
                format!(
                    "Malformed tag state: {}\n\n\
                    Expected shapes:\n\
                    • A JSON array of tag objects: [{{\"text\": \"masterpiece\", \"active\": true}}]\n\
                    • An object wrapping the array: {{\"tags\": [...]}}\n\n\
                    Each tag object must have a 'text' property; 'active', 'strength',\n\
                    'category' and 'highlighted' are optional and default when missing.",
                    msg
                )
            }
            TrigwordsError::Catalog(msg) => {
                format!(
                    "Catalog error: {}\n\n\
                    Suggestions:\n\
                    • Catalog files use [[category]] tables with 'name' and 'tags' keys\n\
                    • 'initial' and '[aliases]' entries must reference declared categories",
                    msg
                )
            }
            TrigwordsError::Config(msg) => {
                if msg.contains("merge strategy") {
                    format!(
                        "{}\n\n\
                        Valid strategies: keep-both, prefer-preset, prefer-incoming\n\
                        Example: trigwords merge preset.json incoming.json --strategy prefer-incoming",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using TrigwordsError
pub type Result<T> = std::result::Result<T, TrigwordsError>;

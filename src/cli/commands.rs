//! CLI command definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "trigwords")]
#[command(about = "Trigger word tag management for image-generation prompts", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Load an alternate preset catalog from a TOML file
    #[arg(long, global = true, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all preset category names
    Categories,

    /// Print the preset tags of a category
    Preset {
        /// Category name (e.g. "All", "Initial", "Pos: Quality")
        category: String,

        /// Load tags disabled instead of enabled
        #[arg(long)]
        inactive: bool,

        /// Default strength applied to every loaded tag
        #[arg(long, value_name = "WEIGHT")]
        strength: Option<f64>,

        /// Emit the tag list as JSON instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Merge two serialized tag lists (JSON files)
    Merge {
        /// Preset tag list file
        preset: PathBuf,

        /// Incoming tag list file
        incoming: PathBuf,

        /// Duplicate resolution: keep-both, prefer-preset, prefer-incoming
        #[arg(short, long, default_value = "keep-both")]
        strategy: String,
    },

    /// Remove duplicate tags from a serialized list, keeping first occurrences
    Dedup {
        /// Tag list file
        file: PathBuf,

        /// Compare raw text instead of lowercased, trimmed text
        #[arg(long)]
        case_sensitive: bool,
    },

    /// Render active trigger words into a single prompt string
    Render(RenderArgs),

    /// Print the change-detection token for a render request
    Fingerprint(RenderArgs),
}

/// Shared inputs of the render and fingerprint commands
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Preset category used when no tag state is supplied
    #[arg(short, long, default_value = "All")]
    pub category: String,

    /// Start preset tags disabled instead of enabled
    #[arg(long)]
    pub inactive: bool,

    /// Enable (word:1.2) strength syntax for weighted prompts
    #[arg(long)]
    pub strength_adjustment: bool,

    /// Free-text prefix placed before everything else
    #[arg(long)]
    pub prefix: Option<String>,

    /// Externally generated syntax fragment, e.g. <lora:name:0.8>
    #[arg(long, value_name = "FRAGMENT")]
    pub lora_syntax: Option<String>,

    /// Serialized tag state: a file path, or "-" for stdin
    #[arg(long, value_name = "FILE")]
    pub state: Option<PathBuf>,

    /// Serialized tag state passed inline as JSON
    #[arg(long, value_name = "JSON", conflicts_with = "state")]
    pub state_json: Option<String>,
}

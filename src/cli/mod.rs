//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands, RenderArgs};
pub use output::{format_category_list, format_tag_list};

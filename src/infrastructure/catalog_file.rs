//! Loading alternate preset catalogs from TOML files
//!
//! Categories are declared as an array of tables so their declaration order
//! (which is the "All" concatenation order) survives deserialization:
//!
//! ```toml
//! initial = ["Quality"]
//!
//! [[category]]
//! name = "Quality"
//! tags = ["masterpiece", "best quality"]
//!
//! [aliases]
//! Q = "Quality"
//! ```

use crate::domain::{Category, PresetCatalog};
use crate::error::{Result, TrigwordsError};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(rename = "category")]
    categories: Vec<CategoryEntry>,

    #[serde(default)]
    aliases: BTreeMap<String, String>,

    #[serde(default)]
    initial: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct CategoryEntry {
    name: String,
    tags: Vec<String>,
}

/// Load a preset catalog from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, declares duplicate
/// category names, or references undeclared categories from `initial` or
/// `[aliases]`.
pub fn load_catalog(path: &Path) -> Result<PresetCatalog> {
    let contents = fs::read_to_string(path)?;
    let file: CatalogFile = toml::from_str(&contents)?;

    let mut seen = HashSet::new();
    for entry in &file.categories {
        if !seen.insert(entry.name.as_str()) {
            return Err(TrigwordsError::Catalog(format!(
                "duplicate category name: {}",
                entry.name
            )));
        }
    }

    for name in &file.initial {
        if !seen.contains(name.as_str()) {
            return Err(TrigwordsError::Catalog(format!(
                "initial references unknown category: {}",
                name
            )));
        }
    }

    for (alias, target) in &file.aliases {
        if !seen.contains(target.as_str()) {
            return Err(TrigwordsError::Catalog(format!(
                "alias '{}' references unknown category: {}",
                alias, target
            )));
        }
    }

    let categories = file
        .categories
        .into_iter()
        .map(|entry| Category {
            name: entry.name,
            tags: entry.tags,
        })
        .collect();

    let aliases = file.aliases.into_iter().collect();

    Ok(PresetCatalog::new(categories, aliases, file.initial))
}

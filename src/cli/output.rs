//! Output formatting utilities

use crate::domain::Tag;

/// Format a list of category names for display
pub fn format_category_list(names: &[String]) -> String {
    let mut output = String::new();
    for name in names {
        output.push_str(name);
        output.push('\n');
    }
    output
}

/// Format a tag list for display, one tag per line with its toggle state
pub fn format_tag_list(tags: &[Tag]) -> String {
    if tags.is_empty() {
        return "No tags found".to_string();
    }

    let mut output = String::new();
    for tag in tags {
        let marker = if tag.active { "on " } else { "off" };
        match tag.strength {
            Some(strength) => {
                output.push_str(&format!(
                    "[{}] {} ({:.2})  {}\n",
                    marker, tag.text, strength, tag.category
                ));
            }
            None => {
                output.push_str(&format!("[{}] {}  {}\n", marker, tag.text, tag.category));
            }
        }
    }
    output
}

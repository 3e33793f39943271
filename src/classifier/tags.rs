//! Parsing of raw business-tag strings.

use log::debug;

/// Parse a raw tag field into an ordered list of tags.
///
/// A bracketed value is read as a list literal with single-quoted strings
/// (`['auto', 'home']`); anything else is split on commas and each piece
/// trimmed, empty pieces included. Malformed list syntax yields an empty list
/// instead of an error.
pub fn parse_tags(tags_str: &str) -> Vec<String> {
    let trimmed = tags_str.trim();

    if trimmed.starts_with('[') {
        if !trimmed.ends_with(']') {
            debug!("Unterminated tag list, ignoring: {trimmed}");
            return Vec::new();
        }
        let json = trimmed.replace('\'', "\"");
        return match serde_json::from_str::<Vec<String>>(&json) {
            Ok(tags) => tags,
            Err(e) => {
                debug!("Malformed tag list {trimmed}: {e}");
                Vec::new()
            }
        };
    }

    trimmed
        .split(',')
        .map(|tag| tag.trim().to_string())
        .collect()
}

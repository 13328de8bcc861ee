//! Parsing of free-text model replies into tiles.
//!
//! The model is asked for a raw JSON array, but real output frequently
//! arrives fenced in markdown or wrapped in prose. Parsing is two-stage:
//! a strict JSON parse of the cleaned text, then a fallback that extracts
//! the first `[...]` substring and parses that.

use crate::models::Tile;
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;
use thiserror::Error;

/// Emoji used when the model omits one or returns an empty string.
pub const DEFAULT_EMOJI: &str = "✨";

static BRACKETED_ARRAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\[.*\]").expect("invalid bracketed-array regex"));

/// All variants carry the cleaned reply text that failed.
#[derive(Debug, Error)]
pub enum TileParseError {
    #[error("model reply is not valid JSON")]
    Unparsable { text: String },

    #[error("model reply is not a JSON array")]
    NotAnArray { text: String },

    #[error("model reply contains no valid tiles")]
    NoValidTiles { text: String },
}

impl TileParseError {
    pub fn text(&self) -> &str {
        match self {
            TileParseError::Unparsable { text }
            | TileParseError::NotAnArray { text }
            | TileParseError::NoValidTiles { text } => text,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            TileParseError::Unparsable { text }
            | TileParseError::NotAnArray { text }
            | TileParseError::NoValidTiles { text } => text,
        }
    }
}

/// Parse a raw model reply into validated tiles.
pub fn parse_tiles(raw: &str) -> Result<Vec<Tile>, TileParseError> {
    let cleaned = strip_code_fences(raw);

    let value = match serde_json::from_str::<Value>(&cleaned) {
        Ok(value) => value,
        Err(_) => match extract_bracketed(&cleaned)
            .and_then(|candidate| serde_json::from_str::<Value>(candidate).ok())
        {
            Some(value) => value,
            None => return Err(TileParseError::Unparsable { text: cleaned }),
        },
    };

    let Some(entries) = value.as_array() else {
        return Err(TileParseError::NotAnArray { text: cleaned });
    };

    let tiles: Vec<Tile> = entries.iter().filter_map(normalize_entry).collect();
    if tiles.is_empty() {
        return Err(TileParseError::NoValidTiles { text: cleaned });
    }

    Ok(tiles)
}

/// Remove ```json / ``` fence markers and surrounding whitespace.
fn strip_code_fences(raw: &str) -> String {
    raw.replace("```json", "")
        .replace("```", "")
        .trim()
        .to_string()
}

/// First `[...]` substring of the reply, if any.
fn extract_bracketed(text: &str) -> Option<&str> {
    BRACKETED_ARRAY.find(text).map(|m| m.as_str())
}

/// An entry survives if its `name` is a non-blank string; `emoji` falls
/// back to the placeholder when missing or blank.
fn normalize_entry(entry: &Value) -> Option<Tile> {
    let name = entry.get("name")?.as_str()?.trim();
    if name.is_empty() {
        return None;
    }

    let emoji = entry
        .get("emoji")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|emoji| !emoji.is_empty())
        .unwrap_or(DEFAULT_EMOJI);

    Some(Tile {
        name: name.to_string(),
        emoji: emoji.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_plain_json_array() {
        let tiles = parse_tiles(r#"[{"name": "juice", "emoji": "🧃"}]"#).unwrap();

        assert_eq!(
            tiles,
            vec![Tile {
                name: "juice".to_string(),
                emoji: "🧃".to_string()
            }]
        );
    }

    #[test]
    fn strips_tagged_code_fences() {
        let tiles = parse_tiles("```json\n[{\"name\":\"more\",\"emoji\":\"➕\"}]\n```").unwrap();

        assert_eq!(tiles.len(), 1);
        assert_eq!(tiles[0].name, "more");
        assert_eq!(tiles[0].emoji, "➕");
    }

    #[test]
    fn strips_bare_code_fences() {
        let tiles = parse_tiles("```\n[{\"name\":\"go\",\"emoji\":\"🏃\"}]\n```").unwrap();

        assert_eq!(tiles[0].name, "go");
    }

    #[test]
    fn recovers_array_wrapped_in_prose() {
        let tiles = parse_tiles(r#"Here you go: [{"name":"milk"}] thanks"#).unwrap();

        assert_eq!(tiles.len(), 1);
        assert_eq!(tiles[0].name, "milk");
        assert_eq!(tiles[0].emoji, DEFAULT_EMOJI);
    }

    #[test]
    fn rejects_non_json_text() {
        let err = parse_tiles("not json at all").unwrap_err();

        assert!(matches!(err, TileParseError::Unparsable { .. }));
        assert_eq!(err.text(), "not json at all");
    }

    #[test]
    fn rejects_a_json_object() {
        let err = parse_tiles(r#"{"tiles": []}"#).unwrap_err();

        assert!(matches!(err, TileParseError::NotAnArray { .. }));
    }

    #[test]
    fn errors_when_no_entry_has_a_usable_name() {
        let err = parse_tiles(r#"[{"name": "  "}, {"emoji": "🎉"}]"#).unwrap_err();

        assert!(matches!(err, TileParseError::NoValidTiles { .. }));
    }

    #[test]
    fn trims_names_and_defaults_blank_emoji() {
        let tiles = parse_tiles(r#"[{"name": " snack ", "emoji": ""}]"#).unwrap();

        assert_eq!(tiles[0].name, "snack");
        assert_eq!(tiles[0].emoji, DEFAULT_EMOJI);
    }

    #[test]
    fn keeps_valid_entries_alongside_invalid_ones() {
        let tiles =
            parse_tiles(r#"[{"name": ""}, {"name": "water", "emoji": "💧"}, "noise"]"#).unwrap();

        assert_eq!(tiles.len(), 1);
        assert_eq!(tiles[0].name, "water");
    }
}

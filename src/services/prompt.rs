//! Prompt construction for tile suggestions.

/// Rendered for `stem`/`existingTiles` when the caller omits them.
const NONE_PLACEHOLDER: &str = "none";

/// Build the instruction sent to the language model.
///
/// Caller-supplied text is interpolated verbatim, unescaped.
pub fn build_tile_prompt(
    category_name: &str,
    stem: Option<&str>,
    existing_tiles: Option<&str>,
) -> String {
    let stem = stem.filter(|s| !s.is_empty()).unwrap_or(NONE_PLACEHOLDER);
    let existing_tiles = existing_tiles
        .filter(|s| !s.is_empty())
        .unwrap_or(NONE_PLACEHOLDER);

    format!(
        r#"You are helping create tiles for an AAC (Augmentative and Alternative Communication) app for non-verbal children.

Category: "{category_name}"
Sentence stem: "{stem}"
Existing tiles: {existing_tiles}

Generate 5 NEW tile suggestions that would be useful for this category. These should be simple words or short phrases that a child might want to communicate. Do not repeat any of the existing tiles.

IMPORTANT: Respond ONLY with a raw JSON array, no markdown code fences and no other text. Each item should have "name" (the word/phrase) and "emoji" (a single relevant emoji).

Example format:
[{{"name": "example", "emoji": "😀"}}, {{"name": "another", "emoji": "🎉"}}]"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embeds_inputs_verbatim() {
        let prompt = build_tile_prompt("Snacks", Some("I want ___"), Some("juice, milk"));

        assert!(prompt.contains("Category: \"Snacks\""));
        assert!(prompt.contains("Sentence stem: \"I want ___\""));
        assert!(prompt.contains("Existing tiles: juice, milk"));
    }

    #[test]
    fn defaults_missing_fields_to_none() {
        let prompt = build_tile_prompt("Snacks", None, None);

        assert!(prompt.contains("Sentence stem: \"none\""));
        assert!(prompt.contains("Existing tiles: none"));
    }

    #[test]
    fn treats_empty_strings_as_missing() {
        let prompt = build_tile_prompt("Snacks", Some(""), Some(""));

        assert!(prompt.contains("Sentence stem: \"none\""));
        assert!(prompt.contains("Existing tiles: none"));
    }
}

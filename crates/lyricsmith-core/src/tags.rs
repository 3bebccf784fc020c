//! Bracketed tag cleaning

/// Flatten `[Label: value]` tags into a comma-separated list of values.
///
/// The input is split on `]`. Labelled fragments keep whatever follows their
/// first `:`; unlabelled fragments lose their opening `[`. Fragments without
/// any `[` are raw text and pass through trimmed, colons included.
///
/// ```
/// use lyricsmith_core::clean_prompt_tags;
///
/// assert_eq!(
///     clean_prompt_tags("[Production: Lo-Fi, Beats] [Mood: Chill]"),
///     "Lo-Fi, Beats, Chill"
/// );
/// ```
pub fn clean_prompt_tags(input: &str) -> String {
    input
        .split(']')
        .filter(|fragment| !fragment.trim().is_empty())
        .map(clean_fragment)
        .collect::<Vec<_>>()
        .join(", ")
}

fn clean_fragment(fragment: &str) -> String {
    if !fragment.contains('[') {
        return fragment.trim().to_string();
    }

    match fragment.split_once(':') {
        Some((_, value)) => value.trim().to_string(),
        None => fragment.replacen('[', "", 1).trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labelled_tags_are_flattened() {
        assert_eq!(
            clean_prompt_tags("[Production: Lo-Fi, Beats] [Mood: Chill]"),
            "Lo-Fi, Beats, Chill"
        );
    }

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(
            clean_prompt_tags("Plain text, no brackets"),
            "Plain text, no brackets"
        );
    }

    #[test]
    fn test_only_first_colon_splits() {
        assert_eq!(clean_prompt_tags("[Mood: 3:00 AM vibes]"), "3:00 AM vibes");
    }

    #[test]
    fn test_unlabelled_tag_loses_bracket() {
        assert_eq!(clean_prompt_tags("[Lo-Fi] [Mood: Chill]"), "Lo-Fi, Chill");
    }

    #[test]
    fn test_raw_text_keeps_its_colon() {
        assert_eq!(clean_prompt_tags("Time: Midnight"), "Time: Midnight");
    }

    #[test]
    fn test_trailing_text_after_tags() {
        assert_eq!(clean_prompt_tags("[Mood: Chill] rainy day"), "Chill, rainy day");
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert_eq!(clean_prompt_tags(""), "");
        assert_eq!(clean_prompt_tags("   "), "");
        assert_eq!(clean_prompt_tags("]]"), "");
    }

    #[test]
    fn test_idempotent_on_bracket_free_input() {
        let inputs = [
            "Plain text, no brackets",
            "Time: Midnight",
            "  padded  ",
            "a: b: c",
            "",
            "Vinyl, 808s",
        ];
        for input in inputs {
            let once = clean_prompt_tags(input);
            assert_eq!(clean_prompt_tags(&once), once, "input: {:?}", input);
        }
    }

    #[test]
    fn test_idempotent_on_cleaned_catalog_values() {
        let catalog = crate::Catalog::builtin();
        for (_, value) in catalog.producers().iter() {
            let once = clean_prompt_tags(value);
            assert!(!once.contains('['));
            assert_eq!(clean_prompt_tags(&once), once);
        }
    }
}

//! Lyrics instruction prompt

use lyricsmith_core::GenerationRequest;

const NOT_AVAILABLE: &str = "N/A";
const NO_CUSTOM_STYLE: &str = "None";
const STANDARD_RHYME: &str = "Standard";

/// Build the instruction block sent to the generator.
///
/// Missing optional fields are spelled out as `N/A`, `None` or `Standard`
/// so the model never sees an empty slot.
pub fn build_lyrics_prompt(request: &GenerationRequest) -> String {
    let or = |value: &Option<String>, fallback: &'static str| -> String {
        value
            .as_deref()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(fallback)
            .to_string()
    };

    let vocalist = request.vocalist.as_str();
    let rhyme_rule = or(&request.rhyme_scheme_detail, STANDARD_RHYME);

    format!(
        r#"You are a professional, world-class lyricist specialized in prompts for AI music generation.
Write lyrics that are emotionally resonant and formatted exactly the way the music engine expects.

CONTEXT:
- Topic: {topic}
- Description: {description}
- Vocalist Persona: {vocalist}
- Vocalist Detail: {vocalist_detail}
- Producer/Production Style: {producer}
- Producer Detail: {producer_detail}
- Rhyme Scheme/Constraint: {rhyme_scheme}
- Rhyme Detail: {rhyme_detail}
- Additional Style: {custom_style}

SYNTAX RULES:
1. STRUCTURE: Use bracketed section headers such as [Intro: Mood], [Verse 1: Technique], [Chorus: Energy], [Bridge: Shift], [Outro: Fade].
2. RAP SECTIONS: Join words with hyphens to force rhythmic flow (e.g. "The-grind-don't-stop-the-climb-is-the-top"). Use double-time or triplets when the persona calls for it.
3. SINGING SECTIONS: Use ellipses (...) and elongated vowels (e.g. "Waitiiiing... for the sun-rise...") to guide melodic phrasing.
4. AD-LIBS: Put backing vocals and ad-libs in parentheses, like (Yeah), (I see you), (Check).
5. BREAKS: Use ( . . . ) for instrumental solos or atmospheric pauses.
6. STYLE ALIGNMENT: Vocabulary and tone must match the persona of {vocalist}.
7. RHYME EXECUTION: Follow the requested rhyme scheme strictly: {rhyme_rule}.

TASK:
Write 4-6 sections of professional lyrics.
Every section starts with a bracketed header naming its style (e.g. [Verse 1: Fast Rap] or [Chorus: Melodic R&B]).
Match the depth of the topic and the vocal qualities of the chosen persona.

OUTPUT:
Return ONLY the lyrics. No introduction, no explanation."#,
        topic = request.topic,
        description = or(&request.topic_description, NOT_AVAILABLE),
        vocalist = vocalist,
        vocalist_detail = or(&request.vocalist_detail, NOT_AVAILABLE),
        producer = or(&request.producer, NOT_AVAILABLE),
        producer_detail = or(&request.producer_detail, NOT_AVAILABLE),
        rhyme_scheme = or(&request.rhyme_scheme, STANDARD_RHYME),
        rhyme_detail = or(&request.rhyme_scheme_detail, NOT_AVAILABLE),
        custom_style = or(&request.custom_style, NO_CUSTOM_STYLE),
        rhyme_rule = rhyme_rule,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_fallbacks() {
        let prompt = build_lyrics_prompt(&GenerationRequest::new("Love", "The Street Poet"));

        assert!(prompt.contains("- Topic: Love\n"));
        assert!(prompt.contains("- Description: N/A\n"));
        assert!(prompt.contains("- Vocalist Detail: N/A\n"));
        assert!(prompt.contains("- Producer/Production Style: N/A\n"));
        assert!(prompt.contains("- Producer Detail: N/A\n"));
        assert!(prompt.contains("- Rhyme Scheme/Constraint: Standard\n"));
        assert!(prompt.contains("- Rhyme Detail: N/A\n"));
        assert!(prompt.contains("- Additional Style: None\n"));
        assert!(prompt.contains("rhyme scheme strictly: Standard."));
    }

    #[test]
    fn test_present_fields_are_embedded() {
        let request = GenerationRequest::new("Dreams", "The Soul Belter")
            .with_topic_description("Chasing the vision")
            .with_vocalist_detail("[Vocals: Powerful]")
            .with_producer("The Lo-Fi Alchemist", "[Production: Lo-Fi]")
            .with_rhyme_scheme("The Standard (ABAB)", "[Rhyme Scheme: ABAB]")
            .with_custom_style("Vinyl, 808s");
        let prompt = build_lyrics_prompt(&request);

        assert!(prompt.contains("- Description: Chasing the vision\n"));
        assert!(prompt.contains("- Vocalist Persona: The Soul Belter\n"));
        assert!(prompt.contains("- Vocalist Detail: [Vocals: Powerful]\n"));
        assert!(prompt.contains("- Producer/Production Style: The Lo-Fi Alchemist\n"));
        assert!(prompt.contains("- Rhyme Scheme/Constraint: The Standard (ABAB)\n"));
        assert!(prompt.contains("- Additional Style: Vinyl, 808s\n"));
        assert!(prompt.contains("match the persona of The Soul Belter."));
        assert!(prompt.contains("rhyme scheme strictly: [Rhyme Scheme: ABAB]."));
        assert!(!prompt.contains("N/A"));
    }

    #[test]
    fn test_blank_custom_style_counts_as_missing() {
        let request = GenerationRequest::new("Love", "The Street Poet").with_custom_style("  ");
        assert!(build_lyrics_prompt(&request).contains("- Additional Style: None\n"));
    }

    #[test]
    fn test_formatting_rules_are_present() {
        let prompt = build_lyrics_prompt(&GenerationRequest::new("Love", "The Street Poet"));
        for marker in ["[Verse 1: Technique]", "hyphens", "(...)", "(Yeah)", "( . . . )"] {
            assert!(prompt.contains(marker), "missing {}", marker);
        }
    }
}

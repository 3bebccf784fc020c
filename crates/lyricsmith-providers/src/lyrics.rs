//! Lyrics generation

use lyricsmith_core::GenerationRequest;

use crate::{build_lyrics_prompt, GenerationFailed, TextGenerator};

/// Stand-in lyrics when the endpoint answers with nothing
pub const EMPTY_LYRICS_PLACEHOLDER: &str = "Failed to generate lyrics.";

/// Build the prompt for `request`, send it once and return the trimmed text.
///
/// An empty answer becomes [`EMPTY_LYRICS_PLACEHOLDER`]. Every transport or
/// endpoint error collapses into [`GenerationFailed`]; nothing is retried.
pub async fn generate_lyrics(
    generator: &dyn TextGenerator,
    request: &GenerationRequest,
) -> Result<String, GenerationFailed> {
    let prompt = build_lyrics_prompt(request);

    tracing::info!(
        provider = generator.provider(),
        model = generator.model(),
        topic = %request.topic,
        "generating lyrics"
    );

    match generator.generate(&prompt).await {
        Ok(Some(text)) if !text.trim().is_empty() => Ok(text.trim().to_string()),
        Ok(_) => {
            tracing::warn!("generator returned no text");
            Ok(EMPTY_LYRICS_PLACEHOLDER.to_string())
        }
        Err(error) => {
            tracing::warn!(%error, "lyrics generation failed");
            Err(GenerationFailed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{traits::ModelResult, ProviderError};
    use async_trait::async_trait;
    use std::sync::Mutex;

    enum Reply {
        Text(&'static str),
        Nothing,
        Fail,
    }

    struct FakeGenerator {
        reply: Reply,
        prompts: Mutex<Vec<String>>,
    }

    impl FakeGenerator {
        fn new(reply: Reply) -> Self {
            Self {
                reply,
                prompts: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl TextGenerator for FakeGenerator {
        async fn generate(&self, prompt: &str) -> ModelResult<Option<String>> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            match self.reply {
                Reply::Text(text) => Ok(Some(text.to_string())),
                Reply::Nothing => Ok(None),
                Reply::Fail => Err(ProviderError::Unavailable {
                    provider: "fake".to_string(),
                }),
            }
        }

        fn model(&self) -> &str {
            "fake-model"
        }

        fn provider(&self) -> &str {
            "fake"
        }
    }

    fn request() -> GenerationRequest {
        GenerationRequest::new("Love", "The Street Poet")
    }

    #[tokio::test]
    async fn test_result_is_trimmed() {
        let generator = FakeGenerator::new(Reply::Text("\n  [Verse 1]\nline  \n"));
        let lyrics = generate_lyrics(&generator, &request()).await.unwrap();
        assert_eq!(lyrics, "[Verse 1]\nline");
    }

    #[tokio::test]
    async fn test_prompt_is_built_from_request() {
        let generator = FakeGenerator::new(Reply::Text("ok"));
        generate_lyrics(&generator, &request()).await.unwrap();

        let prompts = generator.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0], build_lyrics_prompt(&request()));
    }

    #[tokio::test]
    async fn test_empty_answer_uses_placeholder() {
        for reply in [Reply::Nothing, Reply::Text("   \n")] {
            let generator = FakeGenerator::new(reply);
            let lyrics = generate_lyrics(&generator, &request()).await.unwrap();
            assert_eq!(lyrics, EMPTY_LYRICS_PLACEHOLDER);
        }
    }

    #[tokio::test]
    async fn test_errors_collapse_without_retry() {
        let generator = FakeGenerator::new(Reply::Fail);
        let result = generate_lyrics(&generator, &request()).await;
        assert_eq!(result, Err(GenerationFailed));
        assert_eq!(generator.prompts.lock().unwrap().len(), 1);
    }
}

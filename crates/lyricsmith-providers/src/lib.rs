//! Lyricsmith Providers - lyrics prompt and generation clients
//!
//! This crate turns a [`lyricsmith_core::GenerationRequest`] into an
//! instruction prompt and sends it to a text-generation endpoint:
//! - Google (Gemini)

mod config;
mod error;
mod gemini;
mod lyrics;
mod prompt;
mod traits;

pub use config::{
    api_key_from_env, ProviderConfig, API_KEY_ENV_VARS, DEFAULT_GEMINI_BASE_URL,
    DEFAULT_GEMINI_MODEL, DEFAULT_TEMPERATURE, DEFAULT_TIMEOUT_SECONDS, DEFAULT_TOP_P,
};
pub use error::{GenerationFailed, ProviderError};
pub use gemini::GeminiClient;
pub use lyrics::{generate_lyrics, EMPTY_LYRICS_PLACEHOLDER};
pub use prompt::build_lyrics_prompt;
pub use secrecy::SecretString;
pub use traits::{ModelResult, TextGenerator};

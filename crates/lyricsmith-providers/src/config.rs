//! Provider configuration

use secrecy::SecretString;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_TEMPERATURE: f32 = 0.8;
pub const DEFAULT_TOP_P: f32 = 0.95;
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 120;

/// Environment variables checked for an API key, in order
pub const API_KEY_ENV_VARS: &[&str] = &["GEMINI_API_KEY", "GOOGLE_API_KEY", "API_KEY"];

/// Configuration for the generation endpoint
#[derive(Clone)]
pub struct ProviderConfig {
    pub api_key: Option<SecretString>,
    pub base_url: Option<String>,
    pub model: String,
    pub max_tokens: Option<usize>,
    pub temperature: Option<f32>,
    pub top_p: Option<f32>,
    pub timeout_seconds: Option<u64>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            model: DEFAULT_GEMINI_MODEL.to_string(),
            max_tokens: None,
            temperature: Some(DEFAULT_TEMPERATURE),
            top_p: Some(DEFAULT_TOP_P),
            timeout_seconds: Some(DEFAULT_TIMEOUT_SECONDS),
        }
    }
}

impl ProviderConfig {
    pub fn gemini(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(SecretString::from(api_key.into())),
            base_url: Some(DEFAULT_GEMINI_BASE_URL.to_string()),
            ..Default::default()
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: usize) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature.clamp(0.0, 2.0));
        self
    }

    pub fn with_top_p(mut self, top_p: f32) -> Self {
        self.top_p = Some(top_p.clamp(0.0, 1.0));
        self
    }

    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_seconds = Some(seconds);
        self
    }
}

/// Read the API key from `preferred` if given, otherwise from the first set
/// variable in [`API_KEY_ENV_VARS`]
pub fn api_key_from_env(preferred: Option<&str>) -> Option<SecretString> {
    let read = |name: &str| {
        std::env::var(name)
            .ok()
            .filter(|value| !value.trim().is_empty())
    };

    match preferred {
        Some(name) => read(name),
        None => API_KEY_ENV_VARS.iter().find_map(|name| read(name)),
    }
    .map(SecretString::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_default_sampling() {
        let config = ProviderConfig::default();
        assert_eq!(config.model, DEFAULT_GEMINI_MODEL);
        assert_eq!(config.temperature, Some(0.8));
        assert_eq!(config.top_p, Some(0.95));
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_builder_clamps_sampling() {
        let config = ProviderConfig::gemini("key")
            .with_temperature(5.0)
            .with_top_p(-1.0);
        assert_eq!(config.temperature, Some(2.0));
        assert_eq!(config.top_p, Some(0.0));
        assert_eq!(config.api_key.unwrap().expose_secret(), "key");
    }

    #[test]
    fn test_api_key_from_preferred_var() {
        std::env::set_var("LYRICSMITH_TEST_KEY", "secret");
        let key = api_key_from_env(Some("LYRICSMITH_TEST_KEY")).unwrap();
        assert_eq!(key.expose_secret(), "secret");
        assert!(api_key_from_env(Some("LYRICSMITH_TEST_KEY_MISSING")).is_none());
    }
}

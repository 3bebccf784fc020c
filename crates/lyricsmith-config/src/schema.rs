use serde::{Deserialize, Serialize};

/// Main Lyricsmith configuration
///
/// Configuration is loaded from (in priority order):
/// 1. `lyricsmith.jsonc` - JSON with comments
/// 2. `lyricsmith.json` - Standard JSON
/// 3. `lyricsmith.yml` / `lyricsmith.yaml` - YAML format
///
/// Also checks hidden variants (`.lyricsmith.*`) and `~/.config/lyricsmith/`
/// for global config. With no file at all, every field takes its default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LyricsmithConfig {
    /// Generation endpoint settings
    #[serde(default)]
    pub provider: ProviderSettings,

    /// Selections applied before any command-line flags
    #[serde(default)]
    pub defaults: DefaultSelections,

    /// Terminal output settings
    #[serde(default)]
    pub output: OutputSettings,
}

// ============================================================================
// Provider Configuration
// ============================================================================

/// Generation endpoint settings
///
/// # Example
///
/// ```yaml
/// provider:
///   model: gemini-3-flash-preview
///   api_key_env: MY_GEMINI_KEY
///   temperature: 0.8
///   top_p: 0.95
///   timeout_secs: 120
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderSettings {
    /// Model identifier (default: gemini-3-flash-preview)
    #[serde(default = "default_model")]
    pub model: String,

    /// Override for the API base URL
    #[serde(default)]
    pub base_url: Option<String>,

    /// Environment variable holding the API key. When unset, GEMINI_API_KEY,
    /// GOOGLE_API_KEY and API_KEY are tried in turn.
    #[serde(default)]
    pub api_key_env: Option<String>,

    /// Sampling temperature (default: 0.8)
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Nucleus sampling (default: 0.95)
    #[serde(default = "default_top_p")]
    pub top_p: f32,

    /// Maximum output tokens; the endpoint default applies when unset
    #[serde(default)]
    pub max_tokens: Option<usize>,

    /// Request timeout in seconds (default: 120)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: None,
            api_key_env: None,
            temperature: default_temperature(),
            top_p: default_top_p(),
            max_tokens: None,
            timeout_secs: default_timeout(),
        }
    }
}

fn default_model() -> String {
    "gemini-3-flash-preview".to_string()
}

fn default_temperature() -> f32 {
    0.8
}

fn default_top_p() -> f32 {
    0.95
}

fn default_timeout() -> u64 {
    120
}

// ============================================================================
// Default Selections
// ============================================================================

/// Selections pre-filled into every session
///
/// Names must match catalog entries exactly (see `lyricsmith list`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefaultSelections {
    #[serde(default)]
    pub vocalist: Option<String>,

    #[serde(default)]
    pub producer: Option<String>,

    #[serde(default)]
    pub rhyme_scheme: Option<String>,

    #[serde(default)]
    pub custom_style: Option<String>,
}

// ============================================================================
// Output Configuration
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSettings {
    /// Enable colors in output (default: true)
    #[serde(default = "default_true")]
    pub colors: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            colors: default_true(),
        }
    }
}

fn default_true() -> bool {
    true
}

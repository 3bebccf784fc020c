use crate::schema::LyricsmithConfig;
use anyhow::{anyhow, Context, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Jsonc,
    Json,
    Yaml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;

        match ext {
            "jsonc" => Some(Self::Jsonc),
            "json" => Some(Self::Json),
            "yml" | "yaml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub config: LyricsmithConfig,
    /// `None` when no file was found and defaults are in effect
    pub path: Option<PathBuf>,
    pub format: Option<ConfigFormat>,
}

/// Load the configuration, falling back to defaults when no file exists.
///
/// An explicit `config_path` must exist and parse.
pub fn load_config(config_path: Option<&Path>) -> Result<LyricsmithConfig> {
    resolve_config(config_path).map(|r| r.config)
}

pub fn resolve_config(config_path: Option<&Path>) -> Result<ResolvedConfig> {
    let path = match config_path {
        Some(p) => p.to_path_buf(),
        None => match find_config_file() {
            Some(p) => p,
            None => {
                tracing::debug!("no configuration file found, using defaults");
                return Ok(ResolvedConfig {
                    config: LyricsmithConfig::default(),
                    path: None,
                    format: None,
                });
            }
        },
    };

    load_config_from_file(&path)
}

pub fn load_config_from_file(path: &Path) -> Result<ResolvedConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let format = ConfigFormat::from_path(path)
        .ok_or_else(|| anyhow!("Unknown config format for: {}", path.display()))?;

    let config = parse_config_content(&content, format)?;
    tracing::debug!(path = %path.display(), ?format, "loaded configuration");

    Ok(ResolvedConfig {
        config: expand_env_vars(config),
        path: Some(path.to_path_buf()),
        format: Some(format),
    })
}

fn parse_config_content(content: &str, format: ConfigFormat) -> Result<LyricsmithConfig> {
    match format {
        ConfigFormat::Jsonc => json5::from_str(content).context("Failed to parse JSONC"),
        ConfigFormat::Json => serde_json::from_str(content).context("Failed to parse JSON"),
        ConfigFormat::Yaml => serde_yaml_ng::from_str(content).context("Failed to parse YAML"),
    }
}

const CONFIG_CANDIDATES: &[&str] = &[
    "lyricsmith.jsonc",
    "lyricsmith.json",
    "lyricsmith.yml",
    "lyricsmith.yaml",
    ".lyricsmith.jsonc",
    ".lyricsmith.json",
    ".lyricsmith.yml",
    ".lyricsmith.yaml",
];

/// First existing candidate in the working directory, then in
/// `~/.config/lyricsmith/`
pub fn find_config_file() -> Option<PathBuf> {
    let local = CONFIG_CANDIDATES.iter().map(PathBuf::from);
    let global = dirs::home_dir()
        .map(|home| home.join(".config").join("lyricsmith"))
        .into_iter()
        .flat_map(|dir| CONFIG_CANDIDATES.iter().map(move |c| dir.join(c)));

    local.chain(global).find(|path| path.exists())
}

fn expand_env_vars(mut config: LyricsmithConfig) -> LyricsmithConfig {
    config.provider.model = expand_env_string(&config.provider.model);
    config.provider.base_url = config.provider.base_url.as_deref().map(expand_env_string);
    config.provider.api_key_env = config
        .provider
        .api_key_env
        .as_deref()
        .map(expand_env_string);
    config.defaults.custom_style = config
        .defaults
        .custom_style
        .as_deref()
        .map(expand_env_string);
    config
}

fn expand_env_string(s: &str) -> String {
    let mut result = String::new();
    let mut chars = s.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '$' {
            result.push(ch);
            continue;
        }

        if chars.peek() == Some(&'{') {
            // ${VAR}
            chars.next();
            let var_name: String = chars.by_ref().take_while(|&c| c != '}').collect();
            match env::var(&var_name) {
                Ok(value) => result.push_str(&value),
                Err(_) => {
                    result.push_str("${");
                    result.push_str(&var_name);
                    result.push('}');
                }
            }
            continue;
        }

        // $VAR, stopping before the first non-identifier character
        let mut var_name = String::new();
        while let Some(&c) = chars.peek() {
            if c.is_alphanumeric() || c == '_' {
                var_name.push(c);
                chars.next();
            } else {
                break;
            }
        }

        if var_name.is_empty() {
            result.push('$');
        } else if let Ok(value) = env::var(&var_name) {
            result.push_str(&value);
        } else {
            result.push('$');
            result.push_str(&var_name);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_expand_env_string_with_braces() {
        env::set_var("LYRICSMITH_TEST_VAR", "test_value");
        let result = expand_env_string("prefix_${LYRICSMITH_TEST_VAR}_suffix");
        assert_eq!(result, "prefix_test_value_suffix");
    }

    #[test]
    fn test_expand_env_string_without_braces() {
        env::set_var("LYRICSMITH_TEST_VAR2", "value");
        let result = expand_env_string("hello $LYRICSMITH_TEST_VAR2 world");
        assert_eq!(result, "hello value world");
    }

    #[test]
    fn test_expand_env_string_missing_var() {
        let result = expand_env_string("prefix_${LYRICSMITH_NONEXISTENT}_suffix");
        assert_eq!(result, "prefix_${LYRICSMITH_NONEXISTENT}_suffix");
        assert_eq!(expand_env_string("cost: $"), "cost: $");
    }

    #[test]
    fn test_config_format_from_path() {
        assert_eq!(
            ConfigFormat::from_path(Path::new("lyricsmith.jsonc")),
            Some(ConfigFormat::Jsonc)
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("lyricsmith.json")),
            Some(ConfigFormat::Json)
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("lyricsmith.yaml")),
            Some(ConfigFormat::Yaml)
        );
        assert_eq!(ConfigFormat::from_path(Path::new("lyricsmith.toml")), None);
    }

    #[test]
    fn test_load_jsonc_with_comments() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("lyricsmith.jsonc");
        fs::write(
            &path,
            r#"{
  // pick a faster model
  "provider": { "model": "gemini-2.5-flash" /* inline */ },
  "defaults": { "vocalist": "The Street Poet" }
}"#,
        )
        .unwrap();

        let resolved = load_config_from_file(&path).unwrap();
        assert_eq!(resolved.format, Some(ConfigFormat::Jsonc));
        assert_eq!(resolved.config.provider.model, "gemini-2.5-flash");
        assert_eq!(
            resolved.config.defaults.vocalist.as_deref(),
            Some("The Street Poet")
        );
    }

    #[test]
    fn test_load_yaml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("lyricsmith.yml");
        fs::write(
            &path,
            r#"
provider:
  top_p: 0.5
output:
  colors: false
"#,
        )
        .unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.provider.top_p, 0.5);
        assert!(!config.output.colors);
    }

    #[test]
    fn test_env_vars_expand_in_base_url() {
        env::set_var("LYRICSMITH_TEST_HOST", "http://localhost:8080");
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("lyricsmith.json");
        fs::write(
            &path,
            r#"{"provider": {"base_url": "${LYRICSMITH_TEST_HOST}/proxy"}}"#,
        )
        .unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(
            config.provider.base_url.as_deref(),
            Some("http://localhost:8080/proxy")
        );
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.json");
        assert!(load_config(Some(&path)).is_err());
    }

    #[test]
    fn test_unknown_extension_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("lyricsmith.toml");
        fs::write(&path, "").unwrap();
        assert!(load_config_from_file(&path).is_err());
    }

    #[test]
    fn test_config_priority_order_documented() {
        assert_eq!(CONFIG_CANDIDATES[0], "lyricsmith.jsonc");
        assert_eq!(CONFIG_CANDIDATES[1], "lyricsmith.json");
        assert_eq!(CONFIG_CANDIDATES[2], "lyricsmith.yml");
        assert_eq!(CONFIG_CANDIDATES[3], "lyricsmith.yaml");
        assert_eq!(CONFIG_CANDIDATES[4], ".lyricsmith.jsonc");
    }
}

//! Configuration loader with environment variable expansion
//!
//! Loads configuration from `.explainer.toml` in the project root or the user
//! config directory.

use super::types::{ExplainerConfig, ProviderConfig};
use regex::Regex;
use std::path::{Path, PathBuf};

/// Configuration loading error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Load configuration from various sources
///
/// Priority order:
/// 1. Project-level `.explainer.toml`
/// 2. User-level `~/.config/explainer/config.toml`
/// 3. Default configuration
pub fn load_config(project_dir: &Path) -> Result<ExplainerConfig, ConfigError> {
    // Try project-level config first
    let project_config = project_dir.join(".explainer.toml");
    if project_config.exists() {
        return load_from_file(&project_config);
    }

    // Try user-level config
    if let Some(user_config) = get_user_config_path() {
        if user_config.exists() {
            return load_from_file(&user_config);
        }
    }

    // Return default config with environment variable overrides
    Ok(apply_env_overrides(ExplainerConfig::default()))
}

/// Get user config directory path
fn get_user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("explainer").join("config.toml"))
}

/// Load configuration from a specific file
fn load_from_file(path: &Path) -> Result<ExplainerConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let mut config: ExplainerConfig = toml::from_str(&content)?;

    // Expand environment variables in the config
    expand_env_vars(&mut config);

    // Apply environment variable overrides
    config = apply_env_overrides(config);

    Ok(config)
}

/// Expand ${VAR} patterns in string values
fn expand_env_vars(config: &mut ExplainerConfig) {
    let env_regex = Regex::new(r"\$\{([^}]+)\}").unwrap();

    for provider in config.llm.providers.values_mut() {
        if let Some(ref api_key) = provider.api_key {
            provider.api_key = Some(expand_string(api_key, &env_regex));
        }
        if let Some(ref base_url) = provider.base_url {
            provider.base_url = Some(expand_string(base_url, &env_regex));
        }
    }
}

/// Expand environment variables in a single string
fn expand_string(s: &str, regex: &Regex) -> String {
    regex
        .replace_all(s, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
}

/// Apply environment variable overrides for common settings
///
/// Supports direct environment variables:
/// - GROQ_API_KEY -> groq.api_key
/// - GOOGLE_GEMINI_API_KEY / GEMINI_API_KEY -> gemini.api_key
/// - HUGGING_FACE_API_KEY / HF_API_KEY -> huggingface.api_key
/// - EXPLAINER_DEFAULT_PROVIDER -> default provider
fn apply_env_overrides(mut config: ExplainerConfig) -> ExplainerConfig {
    // Groq
    if let Ok(key) = std::env::var("GROQ_API_KEY") {
        if !key.is_empty() {
            let provider = config
                .llm
                .providers
                .entry("groq".to_string())
                .or_insert_with(ProviderConfig::default);
            provider.api_key = Some(key);
            provider.enabled = true;
        }
    }

    // Gemini / Google
    for env_var in ["GOOGLE_GEMINI_API_KEY", "GEMINI_API_KEY"] {
        if let Ok(key) = std::env::var(env_var) {
            if !key.is_empty() {
                let provider = config
                    .llm
                    .providers
                    .entry("gemini".to_string())
                    .or_insert_with(ProviderConfig::default);
                provider.api_key = Some(key);
                provider.enabled = true;
                break;
            }
        }
    }

    // Hugging Face
    for env_var in ["HUGGING_FACE_API_KEY", "HF_API_KEY"] {
        if let Ok(key) = std::env::var(env_var) {
            if !key.is_empty() {
                let provider = config
                    .llm
                    .providers
                    .entry("huggingface".to_string())
                    .or_insert_with(ProviderConfig::default);
                provider.api_key = Some(key);
                provider.enabled = true;
                break;
            }
        }
    }

    // Default provider override
    if let Ok(provider) = std::env::var("EXPLAINER_DEFAULT_PROVIDER") {
        if !provider.is_empty() {
            config.llm.default_provider = provider;
        }
    }

    config
}

/// Create a sample configuration file content
pub fn sample_config() -> &'static str {
    r#"# Explainer Configuration
# Place this file in your project root as .explainer.toml
# or in ~/.config/explainer/config.toml for global settings

[llm]
# Default provider: groq, gemini, huggingface
default_provider = "groq"

# Maximum accepted code length, in characters
max_code_length = 5000

[llm.providers.groq]
enabled = true
api_key = "${GROQ_API_KEY}"
model = "llama-3.1-8b-instant"

[llm.providers.gemini]
enabled = false
api_key = "${GOOGLE_GEMINI_API_KEY}"
model = "gemini-pro"

[llm.providers.huggingface]
enabled = false
api_key = "${HUGGING_FACE_API_KEY}"
model = "microsoft/DialoGPT-large"
"#
}

//! Configuration types for the explainer
//!
//! Defines the structure of `.explainer.toml` configuration.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExplainerConfig {
    /// LLM configuration
    #[serde(default)]
    pub llm: LlmConfig,
}

/// LLM configuration section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Default provider to use (groq, gemini, huggingface)
    #[serde(default = "default_provider")]
    pub default_provider: String,

    /// Maximum accepted code length, in characters
    #[serde(default = "default_max_code_length")]
    pub max_code_length: usize,

    /// Provider configurations
    #[serde(default)]
    pub providers: HashMap<String, ProviderConfig>,
}

fn default_provider() -> String {
    "groq".to_string()
}

fn default_max_code_length() -> usize {
    5000
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            default_provider: default_provider(),
            max_code_length: default_max_code_length(),
            providers: default_providers(),
        }
    }
}

/// Individual provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Whether this provider may be selected
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// API key (supports ${ENV_VAR} syntax)
    #[serde(default)]
    pub api_key: Option<String>,

    /// Base URL for the API
    #[serde(default)]
    pub base_url: Option<String>,

    /// Model override for this provider
    #[serde(default)]
    pub model: Option<String>,

    /// Sampling temperature override
    #[serde(default)]
    pub temperature: Option<f32>,

    /// Output token/length limit override
    #[serde(default)]
    pub max_tokens: Option<u32>,
}

fn default_enabled() -> bool {
    true
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            api_key: None,
            base_url: None,
            model: None,
            temperature: None,
            max_tokens: None,
        }
    }
}

/// Create default provider configurations
fn default_providers() -> HashMap<String, ProviderConfig> {
    let mut providers = HashMap::new();

    // Groq - the default backend
    providers.insert(
        "groq".to_string(),
        ProviderConfig {
            enabled: true,
            api_key: None,
            base_url: Some("https://api.groq.com".to_string()),
            model: Some("llama-3.1-8b-instant".to_string()),
            temperature: None,
            max_tokens: None,
        },
    );

    // Gemini - disabled until an API key is set
    providers.insert(
        "gemini".to_string(),
        ProviderConfig {
            enabled: false,
            api_key: None,
            base_url: Some("https://generativelanguage.googleapis.com".to_string()),
            model: Some("gemini-pro".to_string()),
            temperature: None,
            max_tokens: None,
        },
    );

    // Hugging Face - disabled until an API key is set
    providers.insert(
        "huggingface".to_string(),
        ProviderConfig {
            enabled: false,
            api_key: None,
            base_url: Some("https://api-inference.huggingface.co".to_string()),
            model: Some("microsoft/DialoGPT-large".to_string()),
            temperature: None,
            max_tokens: None,
        },
    );

    providers
}

impl ExplainerConfig {
    /// Get a provider config by name
    pub fn get_provider(&self, name: &str) -> Option<&ProviderConfig> {
        self.llm.providers.get(name)
    }

    /// Get the default provider config
    pub fn default_provider_config(&self) -> Option<&ProviderConfig> {
        self.get_provider(&self.llm.default_provider)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ExplainerConfig::default();
        assert_eq!(config.llm.default_provider, "groq");
        assert_eq!(config.llm.max_code_length, 5000);
        assert!(config.llm.providers.contains_key("groq"));
        assert!(config.llm.providers.contains_key("gemini"));
        assert!(config.llm.providers.contains_key("huggingface"));
    }

    #[test]
    fn test_default_provider_config() {
        let config = ExplainerConfig::default();
        let provider = config.default_provider_config().unwrap();
        assert!(provider.enabled);
        assert!(provider.api_key.is_none());
    }
}

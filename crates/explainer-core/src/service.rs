//! Explanation service facade
//!
//! Owns exactly one active provider adapter and exposes `explain_code` to any
//! frontend. Swapping the backend is a construction-time decision made here;
//! callers never depend on a concrete adapter.

use crate::config::{ExplainerConfig, ProviderConfig};
use crate::llm::{
    ExplanationProvider, GeminiProvider, GroqProvider, HuggingFaceProvider, ProviderError,
    SharedProvider,
};
use crate::request::ExplanationRequest;
use std::sync::Arc;

/// Facade over the active provider adapter
pub struct ExplanationService {
    provider: SharedProvider,
}

impl std::fmt::Debug for ExplanationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExplanationService").finish_non_exhaustive()
    }
}

impl ExplanationService {
    /// Build the service from configuration.
    ///
    /// Constructs the adapter named by `default_provider`; a missing
    /// credential surfaces here as [`ProviderError::MissingApiKey`], before
    /// any network call is attempted.
    pub fn from_config(config: &ExplainerConfig) -> Result<Self, ProviderError> {
        let name = config.llm.default_provider.as_str();
        let provider_config = config.get_provider(name).cloned().unwrap_or_default();

        if !provider_config.enabled {
            return Err(ProviderError::Configuration(format!(
                "Provider '{}' is disabled",
                name
            )));
        }

        let api_key = provider_config.api_key.clone().unwrap_or_default();

        let provider: SharedProvider = match name {
            "groq" => Arc::new(build_groq(&api_key, &provider_config)?),
            "gemini" => Arc::new(build_gemini(&api_key, &provider_config)?),
            "huggingface" => Arc::new(build_huggingface(&api_key, &provider_config)?),
            other => {
                return Err(ProviderError::Configuration(format!(
                    "Unknown provider '{}'",
                    other
                )))
            }
        };

        Ok(Self { provider })
    }

    /// Build the service around an existing provider.
    ///
    /// Injection seam for tests and for future per-request provider
    /// selection; the adapter interface stays the same either way.
    pub fn with_provider(provider: SharedProvider) -> Self {
        Self { provider }
    }

    /// The active provider
    pub fn provider(&self) -> &dyn ExplanationProvider {
        self.provider.as_ref()
    }

    /// Explain a validated request through the active provider.
    ///
    /// Pure delegation; no additional business logic lives here.
    pub fn explain_code(&self, request: &ExplanationRequest) -> Result<String, ProviderError> {
        self.provider.explain_code(request)
    }
}

fn build_groq(api_key: &str, config: &ProviderConfig) -> Result<GroqProvider, ProviderError> {
    let mut provider = GroqProvider::new(api_key)?;
    if let Some(ref url) = config.base_url {
        provider = provider.with_base_url(url);
    }
    if let Some(ref model) = config.model {
        provider = provider.with_model(model);
    }
    if let Some(temperature) = config.temperature {
        provider = provider.with_temperature(temperature);
    }
    if let Some(max_tokens) = config.max_tokens {
        provider = provider.with_max_tokens(max_tokens);
    }
    Ok(provider)
}

fn build_gemini(api_key: &str, config: &ProviderConfig) -> Result<GeminiProvider, ProviderError> {
    let mut provider = GeminiProvider::new(api_key)?;
    if let Some(ref url) = config.base_url {
        provider = provider.with_base_url(url);
    }
    if let Some(ref model) = config.model {
        provider = provider.with_model(model);
    }
    if let Some(temperature) = config.temperature {
        provider = provider.with_temperature(temperature);
    }
    if let Some(max_tokens) = config.max_tokens {
        provider = provider.with_max_output_tokens(max_tokens);
    }
    Ok(provider)
}

fn build_huggingface(
    api_key: &str,
    config: &ProviderConfig,
) -> Result<HuggingFaceProvider, ProviderError> {
    let mut provider = HuggingFaceProvider::new(api_key)?;
    if let Some(ref url) = config.base_url {
        provider = provider.with_base_url(url);
    }
    if let Some(ref model) = config.model {
        provider = provider.with_model(model);
    }
    if let Some(temperature) = config.temperature {
        provider = provider.with_temperature(temperature);
    }
    if let Some(max_tokens) = config.max_tokens {
        provider = provider.with_max_length(max_tokens);
    }
    Ok(provider)
}

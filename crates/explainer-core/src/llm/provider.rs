//! Provider capability trait

use super::ProviderError;
use crate::request::ExplanationRequest;

/// A remote text-generation backend that can explain code.
///
/// Each implementation translates the shared request contract into one remote
/// LLM API's wire format and back. Adapters hold only their credential, base
/// URL and generation parameters, all fixed at construction; they carry no
/// mutable state and are safe to share across requests.
pub trait ExplanationProvider: Send + Sync {
    /// The provider's unique identifier (e.g. "groq", "gemini", "huggingface")
    fn id(&self) -> &str;

    /// The provider's display name (e.g. "Groq", "Gemini", "Hugging Face")
    fn name(&self) -> &str;

    /// Build the provider-specific prompt for a request.
    ///
    /// Pure function of the request: no I/O, no randomness. Identical
    /// requests produce byte-identical prompt text.
    fn build_prompt(&self, request: &ExplanationRequest) -> String;

    /// Turn a validated request into exactly one outbound call to the remote
    /// API and return the model's explanation text.
    fn explain_code(&self, request: &ExplanationRequest) -> Result<String, ProviderError>;
}

/// Wrapper to share a provider across requests
pub type SharedProvider = std::sync::Arc<dyn ExplanationProvider>;

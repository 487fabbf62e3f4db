//! Explainer Core - backend library for the code explainer
//!
//! This crate provides the UI-agnostic backend functionality:
//! - Request/response model shared with the HTTP boundary
//! - Provider adapters (Groq, Gemini, Hugging Face)
//! - Configuration loading
//! - The `ExplanationService` facade
//!
//! Any frontend (HTTP server, CLI, tests) consumes this crate through the
//! `ExplanationService` interface:
//!
//! ```ignore
//! use explainer_core::{load_config, ExplanationService};
//!
//! let config = load_config(&std::env::current_dir()?)?;
//! let service = ExplanationService::from_config(&config)?;
//! let explanation = service.explain_code(&request)?;
//! ```

// Configuration loading
pub mod config;

// LLM provider system
pub mod llm;

// Shared request/response model
pub mod request;

// Main service facade
pub mod service;

// Re-export config types
pub use config::{load_config, ConfigError, ExplainerConfig, LlmConfig, ProviderConfig};

// Re-export LLM types
pub use llm::{
    ExplanationProvider, GeminiProvider, GroqProvider, HuggingFaceProvider, ProviderError,
    SharedProvider,
};

// Re-export request types
pub use request::{
    ExplanationDepth, ExplanationRequest, ExplanationResponse, ExplanationStyle, Language,
    TargetAudience,
};

pub use service::ExplanationService;

/// Get the crate version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

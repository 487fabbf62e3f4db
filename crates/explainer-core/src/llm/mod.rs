//! LLM provider system
//!
//! One adapter per remote backend. Each adapter translates the shared
//! [`ExplanationRequest`](crate::request::ExplanationRequest) into its
//! provider's wire format, makes exactly one HTTP call, and returns the
//! model's explanation text.

mod error;
mod gemini;
mod groq;
mod huggingface;
mod provider;

pub use error::ProviderError;
pub use gemini::GeminiProvider;
pub use groq::GroqProvider;
pub use huggingface::HuggingFaceProvider;
pub use provider::{ExplanationProvider, SharedProvider};

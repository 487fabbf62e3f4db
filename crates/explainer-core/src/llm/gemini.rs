//! Gemini (Google AI) LLM provider
//!
//! Connects to Google's Generative Language API using the single-prompt
//! `generateContent` wire format.

use super::{ExplanationProvider, ProviderError};
use crate::request::ExplanationRequest;

/// Gemini provider for Google AI
#[derive(Debug)]
pub struct GeminiProvider {
    /// API key
    api_key: String,

    /// Base URL for the API
    base_url: String,

    /// Model to use
    model: String,

    /// Sampling temperature
    temperature: f32,

    /// Maximum output tokens
    max_output_tokens: u32,
}

impl GeminiProvider {
    /// Create a new Gemini provider.
    ///
    /// Fails with a missing-key error when the API key is empty, before any
    /// network call is possible.
    pub fn new(api_key: &str) -> Result<Self, ProviderError> {
        if api_key.trim().is_empty() {
            return Err(ProviderError::MissingApiKey(
                "GOOGLE_GEMINI_API_KEY".to_string(),
            ));
        }
        Ok(Self {
            api_key: api_key.to_string(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            model: "gemini-pro".to_string(),
            temperature: 0.7,
            max_output_tokens: 1500,
        })
    }

    /// Create with a specific base URL (for proxies and tests)
    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Override the model
    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    /// Override the sampling temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Override the output token limit
    pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = max_output_tokens;
        self
    }

    /// Extract a machine-readable message from an error response body
    fn api_error(&self, status: u16, response: ureq::Response) -> ProviderError {
        let message = response
            .into_json::<serde_json::Value>()
            .ok()
            .and_then(|json| {
                json.get("error")
                    .and_then(|e| e.get("message"))
                    .and_then(|m| m.as_str())
                    .map(|m| format!("Gemini API error: {}", m))
            })
            .unwrap_or_else(|| format!("HTTP {}", status));
        ProviderError::Api { status, message }
    }
}

impl ExplanationProvider for GeminiProvider {
    fn id(&self) -> &str {
        "gemini"
    }

    fn name(&self) -> &str {
        "Gemini"
    }

    fn build_prompt(&self, request: &ExplanationRequest) -> String {
        let examples_text = if request.include_examples {
            "Include practical examples where relevant. "
        } else {
            ""
        };
        let hint = match request.language_hint() {
            Some(language) => format!(" The code is written in {}.", language),
            None => String::new(),
        };

        format!(
            "You are an expert programming educator. Explain the following code in {language} in \
             a {style} manner. The reader is {audience} and expects {depth}-level coverage.{hint}\n\n\
             CODE:\n{code}\n\n\
             {examples_text}Please structure your explanation with:\n\
             1. Overall purpose and functionality\n\
             2. Key components and their roles\n\
             3. Step-by-step execution flow\n\
             4. Important concepts and patterns\n\n\
             Keep it educational, practical and easy to understand.",
            language = request.language.english_name(),
            style = request.explanation_style.phrase(),
            audience = request.target_audience.phrase(),
            depth = request.explanation_depth.phrase(),
            hint = hint,
            code = request.code,
            examples_text = examples_text,
        )
    }

    fn explain_code(&self, request: &ExplanationRequest) -> Result<String, ProviderError> {
        let prompt = self.build_prompt(request);

        let body = serde_json::json!({
            "contents": [
                { "parts": [ { "text": prompt } ] }
            ],
            "generationConfig": {
                "temperature": self.temperature,
                "maxOutputTokens": self.max_output_tokens
            }
        });

        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let response = match ureq::post(&url)
            .set("Content-Type", "application/json")
            .send_json(&body)
        {
            Ok(response) => response,
            Err(ureq::Error::Status(429, _)) => return Err(ProviderError::RateLimited),
            Err(ureq::Error::Status(status, response)) => {
                return Err(self.api_error(status, response))
            }
            Err(err) => return Err(ProviderError::Connection(err.to_string())),
        };

        let json: serde_json::Value = response
            .into_json()
            .map_err(|_| ProviderError::MalformedResponse("Gemini".to_string()))?;

        json.get("candidates")
            .and_then(|c| c.as_array())
            .and_then(|c| c.first())
            .and_then(|c| c.get("content"))
            .and_then(|c| c.get("parts"))
            .and_then(|p| p.as_array())
            .and_then(|p| p.first())
            .and_then(|p| p.get("text"))
            .and_then(|t| t.as_str())
            // An empty candidate is as unusable as a missing one.
            .filter(|t| !t.is_empty())
            .map(|t| t.to_string())
            .ok_or_else(|| ProviderError::MalformedResponse("Gemini".to_string()))
    }
}

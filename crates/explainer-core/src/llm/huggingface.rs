//! Hugging Face LLM provider
//!
//! Connects to the Hugging Face inference API using the raw text-generation
//! wire format. HTTP 503 means the hosted model is still warming up; this
//! adapter degrades to a locally generated placeholder explanation instead of
//! failing the request.

use super::{ExplanationProvider, ProviderError};
use crate::request::ExplanationRequest;

/// Hugging Face provider for raw text generation
#[derive(Debug)]
pub struct HuggingFaceProvider {
    /// API key
    api_key: String,

    /// Base URL for the inference API
    base_url: String,

    /// Hosted model to query
    model: String,

    /// Sampling temperature
    temperature: f32,

    /// Maximum generated length
    max_length: u32,
}

impl HuggingFaceProvider {
    /// Create a new Hugging Face provider.
    ///
    /// Fails with a missing-key error when the API key is empty, before any
    /// network call is possible.
    pub fn new(api_key: &str) -> Result<Self, ProviderError> {
        if api_key.trim().is_empty() {
            return Err(ProviderError::MissingApiKey(
                "HUGGING_FACE_API_KEY".to_string(),
            ));
        }
        Ok(Self {
            api_key: api_key.to_string(),
            base_url: "https://api-inference.huggingface.co".to_string(),
            model: "microsoft/DialoGPT-large".to_string(),
            temperature: 0.7,
            max_length: 500,
        })
    }

    /// Create with a specific base URL (for proxies and tests)
    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Override the hosted model
    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    /// Override the sampling temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Override the generated length limit
    pub fn with_max_length(mut self, max_length: u32) -> Self {
        self.max_length = max_length;
        self
    }

    /// Locally generated placeholder used while the hosted model warms up.
    ///
    /// Returned as a successful explanation: availability is traded for
    /// canned text rather than an error.
    fn fallback_explanation(&self, request: &ExplanationRequest) -> String {
        format!(
            "🤖 **AI Code Explanation** (Demo Mode)\n\n\
             **Language:** {language}\n\
             **Style:** {style}\n\n\
             **Code Analysis:**\n{code}\n\n\
             **Explanation:**\n\
             The explanation model is warming up right now, so this is a locally generated \
             placeholder.\n\n\
             **Once the model is available you will see:**\n\
             1. Detailed code analysis\n\
             2. Step-by-step execution flow\n\
             3. Programming concepts explained\n\
             4. Practical examples and best practices\n\n\
             *Please try again in a few moments for a live explanation.*",
            language = request.language.english_name(),
            style = request.explanation_style.phrase(),
            code = request.code,
        )
    }

    /// Extract a machine-readable message from an error response body
    fn api_error(&self, status: u16, response: ureq::Response) -> ProviderError {
        let message = response
            .into_json::<serde_json::Value>()
            .ok()
            .and_then(|json| {
                json.get("error")
                    .and_then(|e| e.as_str())
                    .map(|e| format!("Hugging Face: {}", e))
            })
            .unwrap_or_else(|| format!("HTTP {}", status));
        ProviderError::Api { status, message }
    }
}

impl ExplanationProvider for HuggingFaceProvider {
    fn id(&self) -> &str {
        "huggingface"
    }

    fn name(&self) -> &str {
        "Hugging Face"
    }

    fn build_prompt(&self, request: &ExplanationRequest) -> String {
        let code_kind = match request.language_hint() {
            Some(language) => format!("this {} code", language),
            None => "this code".to_string(),
        };
        let examples_item = if request.include_examples {
            "Include practical examples"
        } else {
            "Focus on the core concepts"
        };

        format!(
            "As a programming expert, explain {code_kind} in {language} in a {style} way:\n\n\
             {code}\n\n\
             Provide a clear explanation with:\n\
             1. What the code does\n\
             2. How it works step by step\n\
             3. Key programming concepts used\n\
             4. {examples_item}\n\n\
             Make it educational and easy to understand.",
            code_kind = code_kind,
            language = request.language.english_name(),
            style = request.explanation_style.phrase(),
            code = request.code,
            examples_item = examples_item,
        )
    }

    fn explain_code(&self, request: &ExplanationRequest) -> Result<String, ProviderError> {
        let prompt = self.build_prompt(request);

        let body = serde_json::json!({
            "inputs": prompt,
            "parameters": {
                "max_length": self.max_length,
                "temperature": self.temperature,
                "do_sample": true
            }
        });

        let url = format!("{}/models/{}", self.base_url, self.model);

        let response = match ureq::post(&url)
            .set("Content-Type", "application/json")
            .set("Authorization", &format!("Bearer {}", self.api_key))
            .send_json(&body)
        {
            Ok(response) => response,
            // Model loading; degrade to canned text instead of failing.
            Err(ureq::Error::Status(503, _)) => return Ok(self.fallback_explanation(request)),
            Err(ureq::Error::Status(429, _)) => return Err(ProviderError::RateLimited),
            Err(ureq::Error::Status(status, response)) => {
                return Err(self.api_error(status, response))
            }
            Err(err) => return Err(ProviderError::Connection(err.to_string())),
        };

        let json: serde_json::Value = response
            .into_json()
            .map_err(|_| ProviderError::MalformedResponse("Hugging Face".to_string()))?;

        // The API answers with either an ordered sequence of generations or a
        // single object. An empty generation is as unusable as a missing one.
        if let Some(text) = json
            .as_array()
            .and_then(|generations| generations.first())
            .and_then(|g| g.get("generated_text"))
            .and_then(|t| t.as_str())
            .filter(|t| !t.is_empty())
        {
            return Ok(text.to_string());
        }

        if let Some(text) = json
            .get("generated_text")
            .and_then(|t| t.as_str())
            .filter(|t| !t.is_empty())
        {
            return Ok(text.to_string());
        }

        Err(ProviderError::MalformedResponse("Hugging Face".to_string()))
    }
}

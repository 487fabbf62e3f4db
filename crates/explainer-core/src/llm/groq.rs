//! Groq LLM provider
//!
//! Connects to Groq's OpenAI-compatible chat completion API. The prompt is a
//! friendly-teacher persona, authored separately for English and Bengali.

use super::{ExplanationProvider, ProviderError};
use crate::request::{ExplanationRequest, Language};

/// Groq provider for the chat-completion wire format
#[derive(Debug)]
pub struct GroqProvider {
    /// API key
    api_key: String,

    /// Base URL for the API
    base_url: String,

    /// Model to use
    model: String,

    /// Sampling temperature
    temperature: f32,

    /// Maximum output tokens
    max_tokens: u32,
}

impl GroqProvider {
    /// Create a new Groq provider.
    ///
    /// Fails with a missing-key error when the API key is empty, before any
    /// network call is possible.
    pub fn new(api_key: &str) -> Result<Self, ProviderError> {
        if api_key.trim().is_empty() {
            return Err(ProviderError::MissingApiKey("GROQ_API_KEY".to_string()));
        }
        Ok(Self {
            api_key: api_key.to_string(),
            base_url: "https://api.groq.com".to_string(),
            model: "llama-3.1-8b-instant".to_string(),
            temperature: 0.8,
            max_tokens: 2000,
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
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// System persona, authored separately per target language
    fn system_message(&self, language: Language) -> &'static str {
        match language {
            Language::Bengali => {
                "তুমি একজন বাংলাদেশি প্রোগ্রামিং শিক্ষক। খুবই বন্ধুত্বপূর্ণ এবং সহজভাবে বুঝাও। \
                 বন্ধুর মতো কথা বলো, হাসিখুশি থাকো। টেকনিক্যাল টার্মগুলো ইংরেজিতেই রাখো। \
                 ছোট ছোট বাক্যে লেখো।"
            }
            Language::English => {
                "You are a friendly programming teacher. Explain like you're talking to a friend. \
                 Keep it simple and enjoyable. Use short sentences and practical examples."
            }
        }
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
                    .map(|m| format!("Groq API error: {}", m))
            })
            .unwrap_or_else(|| format!("HTTP {}", status));
        ProviderError::Api { status, message }
    }
}

impl ExplanationProvider for GroqProvider {
    fn id(&self) -> &str {
        "groq"
    }

    fn name(&self) -> &str {
        "Groq"
    }

    fn build_prompt(&self, request: &ExplanationRequest) -> String {
        match request.language {
            Language::Bengali => bengali_prompt(request),
            Language::English => english_prompt(request),
        }
    }

    fn explain_code(&self, request: &ExplanationRequest) -> Result<String, ProviderError> {
        let prompt = self.build_prompt(request);

        let body = serde_json::json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": self.system_message(request.language) },
                { "role": "user", "content": prompt }
            ],
            "temperature": self.temperature,
            "max_tokens": self.max_tokens,
            "stream": false
        });

        let url = format!("{}/openai/v1/chat/completions", self.base_url);

        let response = match ureq::post(&url)
            .set("Content-Type", "application/json")
            .set("Authorization", &format!("Bearer {}", self.api_key))
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
            .map_err(|_| ProviderError::MalformedResponse("Groq".to_string()))?;

        json.get("choices")
            .and_then(|c| c.as_array())
            .and_then(|c| c.first())
            .and_then(|c| c.get("message"))
            .and_then(|m| m.get("content"))
            .and_then(|t| t.as_str())
            // An empty completion is as unusable as a missing one.
            .filter(|t| !t.is_empty())
            .map(|t| t.to_string())
            .ok_or_else(|| ProviderError::MalformedResponse("Groq".to_string()))
    }
}

fn english_prompt(request: &ExplanationRequest) -> String {
    let hint = request.language_hint().unwrap_or("");
    let examples_line = if request.include_examples {
        "- Include practical examples from real life"
    } else {
        "- Skip the examples, focus on the core idea"
    };

    format!(
        "You are a very friendly programming teacher. Explain the following code in English in a \
         simple, humanized way:\n\n\
         **Code:**\n```{hint}\n{code}\n```\n\n\
         **Explanation Style:**\n\
         - {style}\n\
         - Friendly, brotherly tone, like explaining to {audience}\n\
         - {depth} level of depth\n\
         - Keep technical terms as is\n\n\
         **Structure:**\n\
         1. 🎯 **What does it do?** - Simple purpose in one line\n\
         2. 🔧 **How it works?** - Step by step like teaching a friend\n\
         3. 💡 **What we learned?** - Key concepts in simple words\n\
         4. 🚀 **What can we build?** - Practical next steps\n\n\
         **Special Instructions:**\n\
         {examples_line}\n\
         - Very short sentences\n\
         - Use emojis to make it fun\n\
         - Never make it complex, always keep it simple",
        hint = hint,
        code = request.code,
        style = request.explanation_style.phrase(),
        audience = request.target_audience.phrase(),
        depth = request.explanation_depth.phrase(),
        examples_line = examples_line,
    )
}

fn bengali_prompt(request: &ExplanationRequest) -> String {
    let hint = request.language_hint().unwrap_or("");
    let examples_line = if request.include_examples {
        "- মজার বাস্তব উদাহরণ দাও"
    } else {
        "- উদাহরণ বাদ দাও, মূল ধারণায় মনোযোগ দাও"
    };

    format!(
        "তুমি একজন খুবই বন্ধুত্বপূর্ণ প্রোগ্রামিং শিক্ষক। নিচের কোডটি বাংলায় খুব সহজভাবে ব্যাখ্যা করো:\n\n\
         **কোড:**\n```{hint}\n{code}\n```\n\n\
         **ব্যাখ্যার স্টাইল:**\n\
         - ব্যাখ্যার ধরন: {style}\n\
         - পাঠক: {audience}, গভীরতা: {depth}\n\
         - খুব সহজ ভাষায়, যেন নতুন শিক্ষার্থীও বুঝতে পারে\n\
         - বন্ধুর মতো কথোপকথনের ভঙ্গিতে\n\
         - প্রযুক্তিগত শব্দগুলো ইংরেজিতেই রাখবে (যেমন: function, variable, loop)\n\n\
         **কাঠামো:**\n\
         ১. 🎯 **এটা কী কাজ করে?** - মূল উদ্দেশ্য এক কথায় বলো\n\
         ২. 🔧 **কীভাবে কাজ করে?** - ধাপে ধাপে বুঝিয়ে দাও\n\
         ৩. 💡 **কী শিখলাম?** - গুরুত্বপূর্ণ concept গুলো সহজভাবে বলো\n\
         ৪. 🚀 **এরপর কী করা যায়?** - প্র্যাকটিক্যাল আইডিয়া দাও\n\n\
         **বিশেষ নির্দেশ:**\n\
         {examples_line}\n\
         - ছোট ছোট বাক্যে লেখো\n\
         - মজার জন্য ইমোজি ব্যবহার করো\n\
         - কখনও জটিল কোরো না, সবসময় সহজ রাখো",
        hint = hint,
        code = request.code,
        style = request.explanation_style.phrase(),
        audience = request.target_audience.phrase(),
        depth = request.explanation_depth.phrase(),
        examples_line = examples_line,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::{ExplanationDepth, ExplanationStyle, TargetAudience};
    use pretty_assertions::assert_eq;

    fn request() -> ExplanationRequest {
        ExplanationRequest {
            code: "print('hi')".to_string(),
            language: Language::English,
            explanation_style: ExplanationStyle::Beginner,
            include_examples: true,
            programming_language: "auto".to_string(),
            explanation_depth: ExplanationDepth::Basic,
            target_audience: TargetAudience::Student,
        }
    }

    fn provider() -> GroqProvider {
        GroqProvider::new("test-key").unwrap()
    }

    #[test]
    fn test_empty_api_key_is_rejected() {
        let err = GroqProvider::new("  ").unwrap_err();
        assert!(matches!(err, ProviderError::MissingApiKey(_)));
        assert_eq!(err.to_string(), "GROQ_API_KEY is not set");
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let provider = provider();
        let request = request();
        assert_eq!(provider.build_prompt(&request), provider.build_prompt(&request));
    }

    #[test]
    fn test_prompt_embeds_code_verbatim() {
        let provider = provider();
        let mut request = request();
        request.code = "fn main() { println!(\"<&>\"); }".to_string();
        let prompt = provider.build_prompt(&request);
        assert!(prompt.contains("fn main() { println!(\"<&>\"); }"));
    }

    #[test]
    fn test_bengali_prompt_uses_bengali_framing() {
        let provider = provider();
        let mut request = request();
        request.language = Language::Bengali;
        let prompt = provider.build_prompt(&request);
        assert!(prompt.contains("বাংলায়"));
        assert!(prompt.contains("**কোড:**"));
        assert!(!prompt.contains("**Code:**"));
    }

    #[test]
    fn test_english_prompt_uses_english_framing() {
        let provider = provider();
        let prompt = provider.build_prompt(&request());
        assert!(prompt.contains("**Code:**"));
        assert!(!prompt.contains("বাংলায়"));
    }

    #[test]
    fn test_examples_instruction_toggles() {
        let provider = provider();
        let mut request = request();
        let with = provider.build_prompt(&request);
        assert!(with.contains("Include practical examples"));

        request.include_examples = false;
        let without = provider.build_prompt(&request);
        assert!(!without.contains("Include practical examples"));
        assert!(without.contains("Skip the examples"));
    }

    #[test]
    fn test_style_phrase_is_reflected() {
        let provider = provider();
        let mut request = request();
        request.explanation_style = ExplanationStyle::Detailed;
        let prompt = provider.build_prompt(&request);
        assert!(prompt.contains("comprehensive and detailed"));
    }

    #[test]
    fn test_language_hint_is_passed_through() {
        let provider = provider();
        let mut request = request();
        request.programming_language = "rust".to_string();
        let prompt = provider.build_prompt(&request);
        assert!(prompt.contains("```rust\n"));
    }

    #[test]
    fn test_system_message_matches_language() {
        let provider = provider();
        assert!(provider.system_message(Language::English).contains("friendly"));
        assert!(provider.system_message(Language::Bengali).contains("শিক্ষক"));
    }
}

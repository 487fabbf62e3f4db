//! Shared request/response model for code explanations.
//!
//! Wire names follow the UI's JSON contract (`camelCase` fields, lowercase
//! enum literals). Out-of-enum values fail deserialization, so adapters never
//! see an unmapped literal.

use serde::{Deserialize, Serialize};

/// A single explanation request, as submitted by the UI.
///
/// Constructed once per submission, lives for one call chain
/// (endpoint → facade → adapter → remote API → back) and is discarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplanationRequest {
    /// The code snippet to explain. Opaque text, embedded verbatim into the
    /// prompt; the length bound is enforced at the HTTP boundary.
    pub code: String,

    /// Target natural language of the explanation.
    pub language: Language,

    /// Verbosity/tone of the generated text.
    pub explanation_style: ExplanationStyle,

    /// Ask the model to include practical examples.
    pub include_examples: bool,

    /// Programming language hint ("auto", "python", ...). Never validated,
    /// passed through into prompt text as-is.
    pub programming_language: String,

    /// How deep the explanation should go.
    pub explanation_depth: ExplanationDepth,

    /// Who the explanation is written for.
    pub target_audience: TargetAudience,
}

impl ExplanationRequest {
    /// Programming language hint, or `None` when the UI left it on "auto".
    pub fn language_hint(&self) -> Option<&str> {
        if self.programming_language.is_empty() || self.programming_language == "auto" {
            None
        } else {
            Some(&self.programming_language)
        }
    }
}

/// Target natural language of the explanation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Bengali,
}

impl Language {
    /// English name of the language, as used in prompt text
    pub fn english_name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Bengali => "Bengali",
        }
    }
}

/// Explanation style controlling verbosity/tone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExplanationStyle {
    Detailed,
    Concise,
    Beginner,
}

impl ExplanationStyle {
    /// Phrase embedded into prompt text for this style
    pub fn phrase(self) -> &'static str {
        match self {
            ExplanationStyle::Detailed => "comprehensive and detailed",
            ExplanationStyle::Concise => "brief and to the point",
            ExplanationStyle::Beginner => "very simple and easy to understand for beginners",
        }
    }
}

/// How deep the explanation should go
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExplanationDepth {
    Basic,
    Intermediate,
    Advanced,
}

impl ExplanationDepth {
    /// Phrase embedded into prompt text for this depth
    pub fn phrase(self) -> &'static str {
        match self {
            ExplanationDepth::Basic => "basic",
            ExplanationDepth::Intermediate => "intermediate",
            ExplanationDepth::Advanced => "advanced",
        }
    }
}

/// Who the explanation is written for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetAudience {
    Student,
    Developer,
    Senior,
}

impl TargetAudience {
    /// Phrase embedded into prompt text for this audience
    pub fn phrase(self) -> &'static str {
        match self {
            TargetAudience::Student => "a student",
            TargetAudience::Developer => "a working developer",
            TargetAudience::Senior => "a senior engineer",
        }
    }
}

/// Uniform response envelope returned to the UI.
///
/// Exactly one of the success or error semantics holds: a successful response
/// carries a non-empty `explanation` and no `error`; a failed one carries an
/// empty `explanation` and a human-readable `error`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplanationResponse {
    pub explanation: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ExplanationResponse {
    /// Successful response carrying the model's explanation text
    pub fn success(explanation: impl Into<String>) -> Self {
        Self {
            explanation: explanation.into(),
            error: None,
        }
    }

    /// Error response with an empty explanation
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            explanation: String::new(),
            error: Some(message.into()),
        }
    }
}

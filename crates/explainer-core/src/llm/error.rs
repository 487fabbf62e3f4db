//! Provider error types

use thiserror::Error;

/// Error type for provider operations.
///
/// Adapters raise these with a discriminant variant so the HTTP boundary can
/// map variant → status/message instead of pattern-matching free text.
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    /// Missing or empty API credential, caught at construction time before
    /// any network call. Carries the name of the environment variable that
    /// would supply the key.
    #[error("{0} is not set")]
    MissingApiKey(String),

    /// Provider selection or other configuration problem that is not a
    /// missing credential
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Non-success HTTP status from the remote API, with the best available
    /// message extracted from the response body
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Success status whose body does not match the expected schema
    #[error("Invalid response format from {0}")]
    MalformedResponse(String),

    /// Transport failure below the HTTP layer
    #[error("Connection error: {0}")]
    Connection(String),

    /// The remote API reported rate limiting (HTTP 429)
    #[error("Rate limit exceeded")]
    RateLimited,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_api_key_display() {
        let err = ProviderError::MissingApiKey("GROQ_API_KEY".to_string());
        assert_eq!(err.to_string(), "GROQ_API_KEY is not set");
    }

    #[test]
    fn test_configuration_display() {
        let err = ProviderError::Configuration("Provider 'claude' is disabled".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: Provider 'claude' is disabled"
        );
    }

    #[test]
    fn test_api_display() {
        let err = ProviderError::Api {
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "API error (500): boom");
    }

    #[test]
    fn test_malformed_response_display() {
        let err = ProviderError::MalformedResponse("Gemini".to_string());
        assert_eq!(err.to_string(), "Invalid response format from Gemini");
    }

    #[test]
    fn test_connection_display() {
        let err = ProviderError::Connection("refused".to_string());
        assert_eq!(err.to_string(), "Connection error: refused");
    }

    #[test]
    fn test_rate_limited_display() {
        assert_eq!(ProviderError::RateLimited.to_string(), "Rate limit exceeded");
    }

    #[test]
    fn test_clone() {
        let err = ProviderError::Api {
            status: 503,
            message: "warming up".to_string(),
        };
        let cloned = err.clone();
        assert!(matches!(cloned, ProviderError::Api { status: 503, .. }));
    }
}

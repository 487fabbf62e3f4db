//! API route handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use explainer_core::{ExplanationRequest, ExplanationResponse, ProviderError};

use crate::state::AppState;

/// Handle a code explanation request.
///
/// Per-request flow, no shared state across requests:
/// 1. Parse body; malformed payloads (including unknown enum literals) answer
///    400 with the uniform envelope.
/// 2. Validate `code` (trimmed-empty, character-count bound); failures answer
///    400 without ever invoking a provider.
/// 3. Delegate to the facade and await its single outbound call.
/// 4. Map typed provider errors to category-prefixed messages, status 500.
pub async fn explain(
    State(state): State<AppState>,
    payload: Result<Json<ExplanationRequest>, JsonRejection>,
) -> (StatusCode, Json<ExplanationResponse>) {
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ExplanationResponse::error(format!(
                    "❌ Invalid request: {}",
                    rejection
                ))),
            )
        }
    };

    if request.code.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ExplanationResponse::error(
                "❌ Please enter some code to explain.",
            )),
        );
    }

    let max_code_length = state.config.llm.max_code_length;
    if request.code.chars().count() > max_code_length {
        return (
            StatusCode::BAD_REQUEST,
            Json(ExplanationResponse::error(format!(
                "❌ Code is too long. Please keep it under {} characters.",
                max_code_length
            ))),
        );
    }

    tracing::debug!(
        provider = state.service.provider().id(),
        chars = request.code.chars().count(),
        "explaining code"
    );

    // The adapter stack is blocking; bridge it off the async worker.
    let service = state.service.clone();
    let result = tokio::task::spawn_blocking(move || service.explain_code(&request)).await;

    match result {
        Ok(Ok(explanation)) => (
            StatusCode::OK,
            Json(ExplanationResponse::success(explanation)),
        ),
        Ok(Err(err)) => {
            tracing::error!("explanation failed: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ExplanationResponse::error(user_message(&err))),
            )
        }
        Err(err) => {
            tracing::error!("explanation task failed: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ExplanationResponse::error(
                    "❌ Failed to generate explanation. Please try again.",
                )),
            )
        }
    }
}

/// Map a typed provider error to the user-facing message shown by the UI
fn user_message(err: &ProviderError) -> String {
    match err {
        ProviderError::RateLimited => {
            "📊 Rate limit exceeded. Please wait a minute and try again.".to_string()
        }
        ProviderError::MissingApiKey(_) | ProviderError::Api { status: 401 | 403, .. } => {
            "🔑 Invalid API key. Please check your API key.".to_string()
        }
        ProviderError::Connection(_) => {
            "🌐 Network error. Please check your internet connection.".to_string()
        }
        other => format!("❌ {}", other),
    }
}

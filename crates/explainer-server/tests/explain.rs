//! HTTP boundary tests with a stubbed provider.
//!
//! The router is exercised end to end via `tower::ServiceExt::oneshot`; the
//! provider is swapped through the facade's injection seam, so no network is
//! involved.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use explainer_core::{
    ExplainerConfig, ExplanationProvider, ExplanationRequest, ExplanationResponse,
    ExplanationService, ProviderError,
};
use explainer_server::{build_router, AppState};
use http_body_util::BodyExt;
use pretty_assertions::assert_eq;
use std::sync::Arc;
use tower::ServiceExt;

struct StubProvider {
    reply: Result<String, ProviderError>,
}

impl ExplanationProvider for StubProvider {
    fn id(&self) -> &str {
        "stub"
    }

    fn name(&self) -> &str {
        "Stub"
    }

    fn build_prompt(&self, request: &ExplanationRequest) -> String {
        request.code.clone()
    }

    fn explain_code(&self, _request: &ExplanationRequest) -> Result<String, ProviderError> {
        self.reply.clone()
    }
}

fn app(reply: Result<String, ProviderError>) -> axum::Router {
    let service = ExplanationService::with_provider(Arc::new(StubProvider { reply }));
    build_router(AppState::new(ExplainerConfig::default(), service))
}

fn body_json(code: &str) -> String {
    serde_json::json!({
        "code": code,
        "language": "english",
        "explanationStyle": "detailed",
        "includeExamples": true,
        "programmingLanguage": "auto",
        "explanationDepth": "basic",
        "targetAudience": "student"
    })
    .to_string()
}

async fn post_explain(app: axum::Router, body: String) -> (StatusCode, ExplanationResponse) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/explain")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn valid_request_returns_explanation() {
    let app = app(Ok("It prints hi.".to_string()));
    let (status, body) = post_explain(app, body_json("print('hi')")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.explanation, "It prints hi.");
    assert_eq!(body.error, None);
}

#[tokio::test]
async fn empty_code_is_rejected() {
    let app = app(Ok("unused".to_string()));
    let (status, body) = post_explain(app, body_json("")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.explanation, "");
    assert_eq!(
        body.error.as_deref(),
        Some("❌ Please enter some code to explain.")
    );
}

#[tokio::test]
async fn whitespace_only_code_is_rejected() {
    let app = app(Ok("unused".to_string()));
    let (status, body) = post_explain(app, body_json("  \n\t  ")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.explanation, "");
}

#[tokio::test]
async fn oversized_code_is_rejected() {
    let app = app(Ok("unused".to_string()));
    let (status, body) = post_explain(app, body_json(&"x".repeat(5001))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.explanation, "");
    assert!(body.error.unwrap().contains("too long"));
}

#[tokio::test]
async fn code_at_the_bound_is_accepted() {
    let app = app(Ok("fine".to_string()));
    let (status, body) = post_explain(app, body_json(&"x".repeat(5000))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.explanation, "fine");
}

#[tokio::test]
async fn malformed_body_is_rejected() {
    let app = app(Ok("unused".to_string()));
    let (status, body) = post_explain(app, "{not json".to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.explanation, "");
    assert!(body.error.unwrap().starts_with("❌ Invalid request"));
}

#[tokio::test]
async fn unknown_enum_value_is_rejected() {
    let app = app(Ok("unused".to_string()));
    let body = body_json("print('hi')").replace("detailed", "funky");
    let (status, response) = post_explain(app, body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response.explanation, "");
}

#[tokio::test]
async fn provider_error_maps_to_500() {
    let app = app(Err(ProviderError::Api {
        status: 500,
        message: "model melted".to_string(),
    }));
    let (status, body) = post_explain(app, body_json("print('hi')")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body.explanation, "");
    let error = body.error.unwrap();
    assert!(error.starts_with("❌"));
    assert!(error.contains("model melted"));
}

#[tokio::test]
async fn rate_limit_gets_its_own_message() {
    let app = app(Err(ProviderError::RateLimited));
    let (status, body) = post_explain(app, body_json("print('hi')")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.error.unwrap().starts_with("📊"));
}

#[tokio::test]
async fn credential_error_gets_key_message() {
    let app = app(Err(ProviderError::MissingApiKey(
        "GROQ_API_KEY".to_string(),
    )));
    let (status, body) = post_explain(app, body_json("print('hi')")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.error.unwrap().starts_with("🔑"));
}

#[tokio::test]
async fn network_error_gets_connectivity_message() {
    let app = app(Err(ProviderError::Connection("refused".to_string())));
    let (status, body) = post_explain(app, body_json("print('hi')")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.error.unwrap().starts_with("🌐"));
}

#[tokio::test]
async fn health_check_reports_ok() {
    let app = app(Ok("unused".to_string()));
    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["status"], "ok");
}

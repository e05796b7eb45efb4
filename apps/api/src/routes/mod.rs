pub mod diagnostic;
pub mod health;
pub mod home;

use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;

use crate::assistant::handlers;
use crate::errors::AppError;
use crate::hiredesk::handlers as hiredesk;
use crate::state::AppState;

/// Success envelope shared by every endpoint: `{"success": true, "data": ...}`.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> Envelope<T> {
    pub fn ok(data: T) -> Json<Self> {
        Json(Self {
            success: true,
            data,
        })
    }
}

async fn not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}

/// "api/" and "/api" both become "/api"; "" and "/" mean no prefix.
fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        // JobPsych
        .route("/ai/chat", post(handlers::handle_chat))
        .route("/ai/coaching", post(handlers::handle_coaching))
        .route("/ai/analyze-job", post(handlers::handle_analyze_job))
        .route("/ai/analyze", post(handlers::handle_analyze_text))
        .route("/ai/models", get(handlers::handle_models))
        .route("/ai/status", get(handlers::handle_status))
        .route("/ai/career-path", post(handlers::handle_career_path))
        .route("/ai/interview-prep", post(handlers::handle_interview_prep))
        .route("/ai/skill-gap", post(handlers::handle_skill_gap))
        // HireDesk
        .route("/hiredesk/query", post(hiredesk::handle_query))
        .route("/hiredesk/status", get(hiredesk::handle_status))
        .route("/diagnostic", get(diagnostic::handle_diagnostic));

    let router = Router::new()
        .route("/", get(home::handle_home))
        .route("/health", get(health::handle_health))
        .route("/health/detailed", get(health::handle_health_detailed));

    let prefix = normalize_prefix(&state.config.api_prefix);
    let router = if prefix.is_empty() {
        router.merge(api)
    } else {
        router.nest(&prefix, api)
    };

    router.fallback(not_found).with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::assistant::gateway::{tests::StubModel, ModelGateway};
    use crate::config::{Config, GatewayConfig, DEFAULT_MODEL};

    fn test_config(prefix: &str) -> Config {
        Config {
            port: 0,
            api_prefix: prefix.to_string(),
            gemini_api_key: String::new(),
            ai_model: DEFAULT_MODEL.to_string(),
            app_env: "test".to_string(),
            cors_origins: vec!["http://localhost:3000".to_string()],
            rust_log: "info".to_string(),
        }
    }

    fn mock_state() -> AppState {
        let config = test_config("/api");
        let gateway = ModelGateway::initialize(config.gateway());
        AppState::new(config, gateway)
    }

    fn live_state(model: Arc<StubModel>) -> AppState {
        AppState::new(
            test_config("/api"),
            ModelGateway::with_model(GatewayConfig::default(), model),
        )
    }

    async fn send(router: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    #[test]
    fn test_normalize_prefix() {
        assert_eq!(normalize_prefix("/api"), "/api");
        assert_eq!(normalize_prefix("api/"), "/api");
        assert_eq!(normalize_prefix("/"), "");
        assert_eq!(normalize_prefix(""), "");
    }

    #[tokio::test]
    async fn test_chat_without_key_returns_placeholder() {
        let (status, body) = send(
            build_router(mock_state()),
            "POST",
            "/api/ai/chat",
            Some(json!({"message": "Hello", "sessionType": "general"})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        let response = &body["data"]["response"];
        assert!(response["response"]
            .as_str()
            .unwrap()
            .contains("JobPsych AI assistant"));
        assert_eq!(response["sessionType"], "general");
        assert_eq!(response["model"], DEFAULT_MODEL);
    }

    #[tokio::test]
    async fn test_hiredesk_screening_query() {
        let (status, body) = send(
            build_router(mock_state()),
            "POST",
            "/api/hiredesk/query",
            Some(json!({
                "queryType": "screening",
                "query": "What are good screening questions for a React developer?"
            })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["queryType"], "screening");
        assert!(!body["data"]["answer"].as_str().unwrap().is_empty());
        assert!(body["data"]["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_analyze_sentiment() {
        let (status, body) = send(
            build_router(mock_state()),
            "POST",
            "/api/ai/analyze",
            Some(json!({"text": "I love this!", "analysisType": "sentiment"})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["result"]["type"], "sentiment");
        assert_eq!(body["data"]["analysisType"], "sentiment");
    }

    #[tokio::test]
    async fn test_candidate_match_without_context_is_rejected() {
        let (status, body) = send(
            build_router(mock_state()),
            "POST",
            "/api/hiredesk/query",
            Some(json!({"queryType": "candidate_match", "query": "Does this candidate fit?"})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "CONTEXT_VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_shape_validation_failures_are_400() {
        for (uri, payload) in [
            ("/api/ai/chat", json!({"message": ""})),
            ("/api/ai/chat", json!({"message": "hi", "sessionType": "therapy"})),
            ("/api/ai/chat", json!({"message": "x".repeat(2001)})),
            ("/api/ai/analyze", json!({"text": "hi", "analysisType": "tone"})),
            ("/api/ai/analyze-job", json!({"jobDescription": "x"})),
            ("/api/hiredesk/query", json!({"queryType": "screening"})),
            ("/api/hiredesk/query", json!({"query": "q", "queryType": "screening", "jobRole": "r".repeat(201)})),
            ("/api/ai/chat", json!({"message": "Hello", "context": ""})),
            ("/api/ai/chat", json!({"message": "Hello", "model": ""})),
            ("/api/ai/chat", json!({"message": "Hello", "temperature": 0.2})),
            ("/api/ai/analyze-job", json!({"analysisType": "fit", "userProfile": ""})),
            ("/api/ai/coaching", json!({"query": "stuck", "userContext": ""})),
            ("/api/hiredesk/query", json!({"query": "q", "queryType": "candidate_match", "jobRole": ""})),
            ("/api/hiredesk/query", json!({"query": "q", "queryType": "screening", "priority": "high"})),
        ] {
            let (status, body) = send(build_router(mock_state()), "POST", uri, Some(payload)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}: {body}");
            assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        }
    }

    #[tokio::test]
    async fn test_live_chat_401_is_reported_as_credentials_problem() {
        let (status, body) = send(
            build_router(live_state(StubModel::failing(Some(401)))),
            "POST",
            "/api/ai/chat",
            Some(json!({"message": "Hello"})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"]["code"], "INVALID_CREDENTIALS");
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("Invalid API key"));
    }

    #[tokio::test]
    async fn test_live_analysis_failure_is_generic() {
        let (status, body) = send(
            build_router(live_state(StubModel::failing(Some(429)))),
            "POST",
            "/api/ai/analyze-job",
            Some(json!({"analysisType": "fit"})),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["message"], "Failed to analyze job fit");
    }

    #[tokio::test]
    async fn test_derived_flows_without_key() {
        let cases = [
            (
                "/api/ai/coaching",
                json!({"query": "I feel stuck", "sessionType": "motivation"}),
                "coachingType",
            ),
            (
                "/api/ai/career-path",
                json!({"currentRole": "QA", "experience": "3y", "interests": "automation", "goals": "SDET"}),
                "recommendations",
            ),
            (
                "/api/ai/interview-prep",
                json!({"jobDescription": "Backend role", "userProfile": "Go dev", "interviewType": "technical"}),
                "preparation",
            ),
            (
                "/api/ai/skill-gap",
                json!({"targetRole": "ML engineer", "currentSkills": "Python", "desiredSkills": "PyTorch"}),
                "skillGapAnalysis",
            ),
        ];
        for (uri, payload, key) in cases {
            let (status, body) = send(build_router(mock_state()), "POST", uri, Some(payload)).await;
            assert_eq!(status, StatusCode::OK, "{uri}: {body}");
            assert!(!body["data"][key].is_null(), "{uri}: {body}");
        }
    }

    #[tokio::test]
    async fn test_models_and_status() {
        let router = build_router(mock_state());
        let (status, body) = send(router.clone(), "GET", "/api/ai/models", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["models"].as_array().unwrap().len(), 4);
        assert_eq!(body["data"]["default"], DEFAULT_MODEL);

        let (_, body) = send(router, "GET", "/api/ai/status", None).await;
        assert_eq!(body["data"]["status"], "not_configured");
        assert!(body["data"]["lastCheck"].is_string());
    }

    #[tokio::test]
    async fn test_reinitialize_swaps_gateway() {
        let state = mock_state();
        let router = build_router(state.clone());

        state.reinitialize_gateway(GatewayConfig {
            api_key: "AIzaSy-reloaded-key".to_string(),
            default_model: "gemini-1.5-flash".to_string(),
        });

        let (_, body) = send(router, "GET", "/api/ai/status", None).await;
        assert_eq!(body["data"]["status"], "connected");
        assert_eq!(body["data"]["defaultModel"], "gemini-1.5-flash");
    }

    #[tokio::test]
    async fn test_diagnostic_never_exposes_key() {
        let (status, body) = send(build_router(mock_state()), "GET", "/api/diagnostic", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["apiKey"]["exists"], false);
        assert_eq!(body["data"]["connected"], false);
        assert!(body["data"]["apiKey"].get("firstChars").is_none());
    }

    #[tokio::test]
    async fn test_health_home_and_hiredesk_status() {
        let router = build_router(mock_state());
        let (status, body) = send(router.clone(), "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["status"], "OK");

        let (_, body) = send(router.clone(), "GET", "/health/detailed", None).await;
        assert_eq!(body["data"]["services"]["ai"], "not_configured");

        let (_, body) = send(router.clone(), "GET", "/", None).await;
        assert_eq!(body["data"]["ai"]["apiKeyConfigured"], false);
        assert_eq!(body["data"]["routes"][2]["path"], "/api/ai/chat");

        let (_, body) = send(router, "GET", "/api/hiredesk/status", None).await;
        assert_eq!(body["data"]["supportedQueryTypes"][3], "candidate_match");
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let (status, body) = send(build_router(mock_state()), "GET", "/api/nope", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["message"], "Route not found");
    }

    #[tokio::test]
    async fn test_custom_prefix() {
        let config = test_config("/v2");
        let state = AppState::new(config.clone(), ModelGateway::initialize(config.gateway()));
        let (status, _) = send(build_router(state), "GET", "/v2/ai/models", None).await;
        assert_eq!(status, StatusCode::OK);
    }
}

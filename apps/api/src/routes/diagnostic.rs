use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::routes::Envelope;
use crate::state::AppState;

/// Keys shorter than this are almost certainly truncated.
const MIN_PLAUSIBLE_KEY_LENGTH: usize = 30;

#[derive(Debug, Serialize)]
pub struct ApiKeyInfo {
    pub exists: bool,
    pub length: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticData {
    pub timestamp: DateTime<Utc>,
    pub environment: String,
    pub api_key: ApiKeyInfo,
    pub model: String,
    pub connected: bool,
    pub suggestions: Vec<String>,
}

fn key_suggestion(length: usize) -> &'static str {
    match length {
        0 => "GEMINI_API_KEY environment variable is not set",
        n if n < MIN_PLAUSIBLE_KEY_LENGTH => "GEMINI_API_KEY seems too short, please verify",
        _ => "GEMINI_API_KEY is set and has reasonable length",
    }
}

/// GET {prefix}/diagnostic
///
/// Reports key presence and length (never the key) and runs one live probe.
pub async fn handle_diagnostic(State(state): State<AppState>) -> Json<Envelope<DiagnosticData>> {
    let gateway = state.gateway();
    let length = gateway.api_key_length();

    let mut suggestions = vec![key_suggestion(length).to_string()];
    let probe = gateway.probe().await;
    suggestions.extend(probe.suggestions);

    Envelope::ok(DiagnosticData {
        timestamp: Utc::now(),
        environment: state.config.app_env.clone(),
        api_key: ApiKeyInfo {
            exists: length > 0,
            length,
        },
        model: gateway.default_model().to_string(),
        connected: probe.connected,
        suggestions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_suggestion_by_length() {
        assert!(key_suggestion(0).contains("not set"));
        assert!(key_suggestion(12).contains("too short"));
        assert!(key_suggestion(39).contains("reasonable length"));
    }
}

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::routes::Envelope;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AiInfo {
    pub model: String,
    pub api_key_configured: bool,
}

#[derive(Debug, Serialize)]
pub struct CorsInfo {
    pub origins: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct Uptime {
    pub seconds: u64,
    pub human: String,
}

#[derive(Debug, Serialize)]
pub struct RouteInfo {
    pub method: &'static str,
    pub path: String,
    pub description: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeData {
    pub name: &'static str,
    pub description: &'static str,
    pub version: &'static str,
    pub environment: String,
    pub api_prefix: String,
    pub ai: AiInfo,
    pub cors: CorsInfo,
    pub uptime: Uptime,
    pub timestamp: DateTime<Utc>,
    pub routes: Vec<RouteInfo>,
}

const API_ROUTES: &[(&str, &str, &str)] = &[
    ("POST", "/ai/chat", "Chat with JobPsych AI"),
    ("POST", "/ai/coaching", "Career coaching session"),
    ("POST", "/ai/analyze-job", "Job fit and career analysis"),
    ("POST", "/ai/analyze", "Text analysis (sentiment, summary, keywords)"),
    ("GET", "/ai/models", "Available AI models"),
    ("GET", "/ai/status", "AI service status"),
    ("POST", "/ai/career-path", "Career path recommendations"),
    ("POST", "/ai/interview-prep", "Interview preparation"),
    ("POST", "/ai/skill-gap", "Skill gap analysis"),
    ("POST", "/hiredesk/query", "HireDesk recruiter assistant"),
    ("GET", "/hiredesk/status", "HireDesk service status"),
    ("GET", "/diagnostic", "Provider connectivity diagnostics"),
];

fn format_uptime(seconds: u64) -> String {
    format!(
        "{}h {}m {}s",
        seconds / 3600,
        (seconds % 3600) / 60,
        seconds % 60
    )
}

/// GET /
pub async fn handle_home(State(state): State<AppState>) -> Json<Envelope<HomeData>> {
    let seconds = state.started_at.elapsed().as_secs();
    let gateway = state.gateway();
    let prefix = &state.config.api_prefix;

    let mut routes = vec![
        RouteInfo {
            method: "GET",
            path: "/health".to_string(),
            description: "Health check",
        },
        RouteInfo {
            method: "GET",
            path: "/health/detailed".to_string(),
            description: "Detailed health check",
        },
    ];
    routes.extend(API_ROUTES.iter().map(|&(method, path, description)| RouteInfo {
        method,
        path: format!("{prefix}{path}"),
        description,
    }));

    Envelope::ok(HomeData {
        name: "jobpsych-ai-assistant",
        description: "JobPsych AI Assistant - Career psychology and professional development guidance",
        version: env!("CARGO_PKG_VERSION"),
        environment: state.config.app_env.clone(),
        api_prefix: prefix.clone(),
        ai: AiInfo {
            model: gateway.default_model().to_string(),
            api_key_configured: gateway.has_key(),
        },
        cors: CorsInfo {
            origins: state.config.cors_origins.clone(),
        },
        uptime: Uptime {
            seconds,
            human: format_uptime(seconds),
        },
        timestamp: Utc::now(),
        routes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_uptime() {
        assert_eq!(format_uptime(0), "0h 0m 0s");
        assert_eq!(format_uptime(3723), "1h 2m 3s");
    }
}

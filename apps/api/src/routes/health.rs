use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::ConnectionStatus;
use crate::routes::Envelope;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthData {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
    pub uptime: f64,
    pub environment: String,
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SystemInfo {
    pub platform: &'static str,
    pub arch: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ServicesInfo {
    pub ai: ConnectionStatus,
}

#[derive(Debug, Serialize)]
pub struct DetailedHealthData {
    #[serde(flatten)]
    pub health: HealthData,
    pub system: SystemInfo,
    pub services: ServicesInfo,
}

fn health_data(state: &AppState) -> HealthData {
    HealthData {
        status: "OK",
        timestamp: Utc::now(),
        uptime: state.started_at.elapsed().as_secs_f64(),
        environment: state.config.app_env.clone(),
        version: env!("CARGO_PKG_VERSION"),
    }
}

/// GET /health
pub async fn handle_health(State(state): State<AppState>) -> Json<Envelope<HealthData>> {
    Envelope::ok(health_data(&state))
}

/// GET /health/detailed
pub async fn handle_health_detailed(
    State(state): State<AppState>,
) -> Json<Envelope<DetailedHealthData>> {
    Envelope::ok(DetailedHealthData {
        health: health_data(&state),
        system: SystemInfo {
            platform: std::env::consts::OS,
            arch: std::env::consts::ARCH,
        },
        services: ServicesInfo {
            ai: state.gateway().status().status,
        },
    })
}

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionStatus {
    Connected,
    NotConfigured,
}

/// Snapshot of the gateway configuration. Built without touching the network.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceStatus {
    pub status: ConnectionStatus,
    pub provider: &'static str,
    pub models: Vec<String>,
    pub default_model: String,
    pub features: Vec<&'static str>,
    pub last_check: DateTime<Utc>,
}

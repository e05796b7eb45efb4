use axum::{extract::rejection::JsonRejection, extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::hiredesk::service::process_query;
use crate::models::{HireDeskQuery, HireDeskResponse, QueryType};
use crate::routes::Envelope;
use crate::state::AppState;
use crate::validation::validate_request;

#[derive(Debug, Serialize)]
pub struct QueryData {
    #[serde(flatten)]
    pub response: HireDeskResponse,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HireDeskStatus {
    pub service: &'static str,
    pub status: &'static str,
    pub supported_query_types: [QueryType; 4],
    pub version: &'static str,
    pub timestamp: DateTime<Utc>,
}

/// POST {prefix}/hiredesk/query
pub async fn handle_query(
    State(state): State<AppState>,
    payload: Result<Json<HireDeskQuery>, JsonRejection>,
) -> Result<Json<Envelope<QueryData>>, AppError> {
    let Json(query) = payload?;
    validate_request(&query)?;

    info!(
        query_type = query.query_type.as_str(),
        has_job_role = query.job_role.is_some(),
        has_candidate_info = query.candidate_info.is_some(),
        "HireDesk query received"
    );

    let response = process_query(&state.gateway(), &query).await?;

    Ok(Envelope::ok(QueryData {
        response,
        timestamp: Utc::now(),
    }))
}

/// GET {prefix}/hiredesk/status
pub async fn handle_status() -> Json<Envelope<HireDeskStatus>> {
    Envelope::ok(HireDeskStatus {
        service: "HireDesk AI Assistant",
        status: "operational",
        supported_query_types: QueryType::ALL,
        version: env!("CARGO_PKG_VERSION"),
        timestamp: Utc::now(),
    })
}

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::assistant::errors::GatewayError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

fn gateway_status(err: &GatewayError) -> StatusCode {
    match err {
        GatewayError::ContextValidation(_) => StatusCode::BAD_REQUEST,
        GatewayError::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        GatewayError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
        GatewayError::InvalidCredentials
        | GatewayError::InvalidRequest
        | GatewayError::Unknown(_) => StatusCode::BAD_GATEWAY,
        GatewayError::AnalysisFailed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                format!("Validation error: {msg}"),
            ),
            AppError::Gateway(e) => {
                match e {
                    GatewayError::ContextValidation(_) => {
                        tracing::warn!(code = e.code(), "Rejected request: {e}")
                    }
                    GatewayError::AnalysisFailed { source, .. } => {
                        tracing::error!(code = e.code(), cause = %source, "Gateway error: {e}")
                    }
                    _ => tracing::error!(code = e.code(), "Gateway error: {e}"),
                }
                (gateway_status(e), e.code(), e.to_string())
            }
        };

        let body = Json(json!({
            "success": false,
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

use thiserror::Error;

use crate::llm_client::ProviderError;

/// Failures surfaced by the model gateway.
///
/// Missing configuration is not represented here: it routes to the mock
/// path instead of failing.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Google Gemini service is temporarily unavailable. Please try again later.")]
    ServiceUnavailable,

    #[error("Invalid API key. Please check your GEMINI_API_KEY configuration.")]
    InvalidCredentials,

    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("Invalid request. Please check your input and try again.")]
    InvalidRequest,

    #[error("Failed to process request with Gemini: {0}")]
    Unknown(String),

    #[error("Failed to analyze {resource}")]
    AnalysisFailed {
        resource: &'static str,
        #[source]
        source: ProviderError,
    },

    #[error("{0}")]
    ContextValidation(String),
}

impl GatewayError {
    /// Stable machine-readable code for the response envelope.
    pub fn code(&self) -> &'static str {
        match self {
            GatewayError::ServiceUnavailable => "PROVIDER_UNAVAILABLE",
            GatewayError::InvalidCredentials => "INVALID_CREDENTIALS",
            GatewayError::RateLimited => "RATE_LIMITED",
            GatewayError::InvalidRequest => "INVALID_UPSTREAM_REQUEST",
            GatewayError::Unknown(_) => "UNKNOWN_PROVIDER_ERROR",
            GatewayError::AnalysisFailed { .. } => "ANALYSIS_FAILED",
            GatewayError::ContextValidation(_) => "CONTEXT_VALIDATION_ERROR",
        }
    }
}

/// Maps an upstream status to the gateway taxonomy. Shared by every live path
/// that reports classified failures.
pub fn classify(status: Option<u16>, message: &str) -> GatewayError {
    match status {
        Some(503) => GatewayError::ServiceUnavailable,
        Some(401) => GatewayError::InvalidCredentials,
        Some(429) => GatewayError::RateLimited,
        Some(400) => GatewayError::InvalidRequest,
        _ if message.is_empty() => GatewayError::Unknown("Unknown error".to_string()),
        _ => GatewayError::Unknown(message.to_string()),
    }
}

impl From<ProviderError> for GatewayError {
    fn from(e: ProviderError) -> Self {
        classify(e.status, &e.message)
    }
}

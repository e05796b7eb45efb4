use tracing::error;

use crate::assistant::errors::GatewayError;
use crate::assistant::gateway::ModelGateway;
use crate::hiredesk::validation::validate_query_context;
use crate::models::{HireDeskQuery, HireDeskResponse};

/// Validates the query context, then answers it through the gateway.
pub async fn process_query(
    gateway: &ModelGateway,
    query: &HireDeskQuery,
) -> Result<HireDeskResponse, GatewayError> {
    let validation = validate_query_context(query);
    if !validation.is_valid {
        return Err(GatewayError::ContextValidation(
            validation
                .message
                .unwrap_or_else(|| "Invalid query context".to_string()),
        ));
    }

    gateway.recruiter_query(query).await.inspect_err(|e| {
        error!(
            query_type = query.query_type.as_str(),
            error = %e,
            "HireDesk query processing failed"
        )
    })
}

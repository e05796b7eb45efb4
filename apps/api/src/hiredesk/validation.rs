use tracing::warn;

use crate::models::{HireDeskQuery, QueryType};

#[derive(Debug, Clone, PartialEq)]
pub struct QueryValidation {
    pub is_valid: bool,
    pub message: Option<String>,
}

impl QueryValidation {
    fn valid() -> Self {
        Self {
            is_valid: true,
            message: None,
        }
    }
}

fn is_present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

/// Cross-field rule for recruiter queries.
///
/// - `candidate_match` needs a job role or candidate information.
/// - `interview_questions` and `job_posting` without a job role are accepted
///   but logged as degraded context.
pub fn validate_query_context(query: &HireDeskQuery) -> QueryValidation {
    let has_role = is_present(&query.job_role);

    match query.query_type {
        QueryType::CandidateMatch if !has_role && !is_present(&query.candidate_info) => {
            QueryValidation {
                is_valid: false,
                message: Some(
                    "Candidate matching requires either job role or candidate information"
                        .to_string(),
                ),
            }
        }
        QueryType::InterviewQuestions | QueryType::JobPosting if !has_role => {
            warn!(
                query_type = query.query_type.as_str(),
                "Job role not provided for query type; answering with degraded context"
            );
            QueryValidation::valid()
        }
        _ => QueryValidation::valid(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_match_without_context_is_invalid() {
        let query = HireDeskQuery::new("Is this a fit?", QueryType::CandidateMatch);
        let result = validate_query_context(&query);
        assert!(!result.is_valid);
        assert!(result.message.unwrap().contains("job role or candidate information"));
    }

    #[test]
    fn test_candidate_match_with_job_role_is_valid() {
        let mut query = HireDeskQuery::new("Is this a fit?", QueryType::CandidateMatch);
        query.job_role = Some("Data Engineer".to_string());
        assert!(validate_query_context(&query).is_valid);
    }

    #[test]
    fn test_candidate_match_with_candidate_info_is_valid() {
        let mut query = HireDeskQuery::new("Is this a fit?", QueryType::CandidateMatch);
        query.candidate_info = Some("6 years Spark".to_string());
        assert!(validate_query_context(&query).is_valid);
    }

    #[test]
    fn test_empty_strings_do_not_count_as_context() {
        let mut query = HireDeskQuery::new("Is this a fit?", QueryType::CandidateMatch);
        query.job_role = Some(String::new());
        assert!(!validate_query_context(&query).is_valid);
    }

    #[test]
    fn test_missing_role_is_only_a_warning() {
        for query_type in [QueryType::InterviewQuestions, QueryType::JobPosting, QueryType::Screening] {
            let query = HireDeskQuery::new("Help", query_type);
            assert_eq!(validate_query_context(&query), QueryValidation::valid());
        }
    }
}

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Recruiter query flavours. Drives the HireDesk system prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryType {
    Screening,
    InterviewQuestions,
    JobPosting,
    CandidateMatch,
}

impl QueryType {
    pub const ALL: [QueryType; 4] = [
        QueryType::Screening,
        QueryType::InterviewQuestions,
        QueryType::JobPosting,
        QueryType::CandidateMatch,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QueryType::Screening => "screening",
            QueryType::InterviewQuestions => "interview_questions",
            QueryType::JobPosting => "job_posting",
            QueryType::CandidateMatch => "candidate_match",
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HireDeskQuery {
    #[validate(length(min = 1, max = 2000))]
    pub query: String,
    #[validate(length(min = 1, max = 200))]
    pub job_role: Option<String>,
    #[validate(length(min = 1, max = 3000))]
    pub candidate_info: Option<String>,
    pub query_type: QueryType,
    #[validate(length(min = 1, max = 1000))]
    pub context: Option<String>,
}

#[cfg(test)]
impl HireDeskQuery {
    pub fn new(query: impl Into<String>, query_type: QueryType) -> Self {
        Self {
            query: query.into(),
            job_role: None,
            candidate_info: None,
            query_type,
            context: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HireDeskResponse {
    pub answer: String,
    pub query_type: QueryType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_deserializes_camel_case_fields() {
        let query: HireDeskQuery = serde_json::from_str(
            r#"{"query": "Match?", "jobRole": "SRE", "candidateInfo": "5y Go", "queryType": "candidate_match"}"#,
        )
        .unwrap();
        assert_eq!(query.query_type, QueryType::CandidateMatch);
        assert_eq!(query.job_role.as_deref(), Some("SRE"));
        assert_eq!(query.candidate_info.as_deref(), Some("5y Go"));
    }

    #[test]
    fn test_empty_job_role_fails_validation() {
        let query: HireDeskQuery = serde_json::from_str(
            r#"{"query": "Match?", "jobRole": "", "queryType": "candidate_match"}"#,
        )
        .unwrap();
        assert!(query.validate().is_err());
    }

    #[test]
    fn test_query_type_rejects_unknown_value() {
        let parsed = serde_json::from_str::<HireDeskQuery>(r#"{"query": "x", "queryType": "payroll"}"#);
        assert!(parsed.is_err());
    }
}

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::Validate;

/// Job-fit analysis flavours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobAnalysisType {
    Fit,
    SkillsGap,
    CareerPath,
    InterviewPrep,
}

impl JobAnalysisType {
    #[cfg(test)]
    pub const ALL: [JobAnalysisType; 4] = [
        JobAnalysisType::Fit,
        JobAnalysisType::SkillsGap,
        JobAnalysisType::CareerPath,
        JobAnalysisType::InterviewPrep,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobAnalysisType::Fit => "fit",
            JobAnalysisType::SkillsGap => "skills_gap",
            JobAnalysisType::CareerPath => "career_path",
            JobAnalysisType::InterviewPrep => "interview_prep",
        }
    }
}

/// Free-text analysis flavours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAnalysisType {
    Sentiment,
    Summary,
    Keywords,
}

impl TextAnalysisType {
    #[cfg(test)]
    pub const ALL: [TextAnalysisType; 3] = [
        TextAnalysisType::Sentiment,
        TextAnalysisType::Summary,
        TextAnalysisType::Keywords,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TextAnalysisType::Sentiment => "sentiment",
            TextAnalysisType::Summary => "summary",
            TextAnalysisType::Keywords => "keywords",
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct JobAnalysisRequest {
    #[validate(length(min = 1, max = 3000))]
    pub job_description: Option<String>,
    #[validate(length(min = 1, max = 2000))]
    pub user_profile: Option<String>,
    pub analysis_type: JobAnalysisType,
}

/// Structured output of every analysis, live or mock.
///
/// `result` is an open map: its keys depend on the analysis kind and on
/// whether the mock path produced it.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    #[serde(rename = "type")]
    pub analysis_type: String,
    pub result: Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    pub insights: Vec<String>,
    pub recommendations: Vec<String>,
}

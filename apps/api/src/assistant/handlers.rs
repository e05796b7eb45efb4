//! Axum route handlers for the JobPsych API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::assistant::gateway::ModelGateway;
use crate::errors::AppError;
use crate::models::{
    AnalysisResult, ChatRequest, ChatResponse, JobAnalysisRequest, JobAnalysisType,
    ServiceStatus, SessionType, TextAnalysisType,
};
use crate::routes::Envelope;
use crate::state::AppState;
use crate::validation::validate_request;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoachingFocus {
    GoalSetting,
    ProblemSolving,
    Motivation,
    CareerChange,
}

impl CoachingFocus {
    fn as_str(&self) -> &'static str {
        match self {
            CoachingFocus::GoalSetting => "goal_setting",
            CoachingFocus::ProblemSolving => "problem_solving",
            CoachingFocus::Motivation => "motivation",
            CoachingFocus::CareerChange => "career_change",
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CoachingRequest {
    #[validate(length(min = 1, max = 1000))]
    pub query: String,
    pub session_type: Option<CoachingFocus>,
    #[validate(length(min = 1, max = 1000))]
    pub user_context: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AnalyzeTextRequest {
    #[validate(length(min = 1, max = 5000))]
    pub text: String,
    pub analysis_type: TextAnalysisType,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CareerPathRequest {
    #[validate(length(min = 1, max = 200))]
    pub current_role: String,
    #[validate(length(min = 1, max = 1000))]
    pub experience: String,
    #[validate(length(min = 1, max = 1000))]
    pub interests: String,
    #[validate(length(min = 1, max = 1000))]
    pub goals: String,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewType {
    Technical,
    Behavioral,
    CaseStudy,
    #[default]
    General,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct InterviewPrepRequest {
    #[validate(length(min = 1, max = 3000))]
    pub job_description: String,
    #[validate(length(min = 1, max = 2000))]
    pub user_profile: String,
    pub interview_type: Option<InterviewType>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SkillGapRequest {
    #[validate(length(min = 1, max = 200))]
    pub target_role: String,
    #[validate(length(min = 1, max = 1000))]
    pub current_skills: String,
    #[validate(length(min = 1, max = 1000))]
    pub desired_skills: String,
}

#[derive(Debug, Serialize)]
pub struct ChatData {
    pub response: ChatResponse,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoachingData {
    pub response: ChatResponse,
    pub coaching_type: &'static str,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct JobAnalysisData {
    pub analysis: AnalysisResult,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextAnalysisData {
    pub result: AnalysisResult,
    pub analysis_type: TextAnalysisType,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ModelsData {
    pub models: Vec<String>,
    pub default: String,
}

#[derive(Debug, Serialize)]
pub struct CareerPathData {
    pub recommendations: ChatResponse,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewPrepData {
    pub preparation: AnalysisResult,
    pub interview_type: InterviewType,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGapData {
    pub skill_gap_analysis: AnalysisResult,
    pub timestamp: DateTime<Utc>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST {prefix}/ai/chat
pub async fn handle_chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<Envelope<ChatData>>, AppError> {
    let Json(request) = payload?;
    validate_request(&request)?;

    let response = state.gateway().chat(&request).await?;

    Ok(Envelope::ok(ChatData {
        response,
        timestamp: Utc::now(),
    }))
}

/// POST {prefix}/ai/coaching
///
/// Runs a chat in coaching mode; the coaching focus and user context travel
/// as chat context.
pub async fn handle_coaching(
    State(state): State<AppState>,
    payload: Result<Json<CoachingRequest>, JsonRejection>,
) -> Result<Json<Envelope<CoachingData>>, AppError> {
    let Json(request) = payload?;
    validate_request(&request)?;

    let coaching_type = request
        .session_type
        .map(|focus| focus.as_str())
        .unwrap_or("general");
    let chat = ChatRequest::new(request.query, SessionType::Coaching).with_context(format!(
        "Coaching Session Type: {coaching_type}\nUser Context: {}",
        request
            .user_context
            .as_deref()
            .unwrap_or("No additional context")
    ));

    let response = state.gateway().chat(&chat).await?;

    Ok(Envelope::ok(CoachingData {
        response,
        coaching_type,
        timestamp: Utc::now(),
    }))
}

/// POST {prefix}/ai/analyze-job
pub async fn handle_analyze_job(
    State(state): State<AppState>,
    payload: Result<Json<JobAnalysisRequest>, JsonRejection>,
) -> Result<Json<Envelope<JobAnalysisData>>, AppError> {
    let Json(request) = payload?;
    validate_request(&request)?;

    let analysis = state.gateway().analyze_job_fit(&request).await?;

    Ok(Envelope::ok(JobAnalysisData {
        analysis,
        timestamp: Utc::now(),
    }))
}

/// POST {prefix}/ai/analyze
pub async fn handle_analyze_text(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeTextRequest>, JsonRejection>,
) -> Result<Json<Envelope<TextAnalysisData>>, AppError> {
    let Json(request) = payload?;
    validate_request(&request)?;

    let result = state
        .gateway()
        .analyze_text(&request.text, request.analysis_type.as_str())
        .await?;

    Ok(Envelope::ok(TextAnalysisData {
        result,
        analysis_type: request.analysis_type,
        timestamp: Utc::now(),
    }))
}

/// GET {prefix}/ai/models
pub async fn handle_models(State(state): State<AppState>) -> Json<Envelope<ModelsData>> {
    let gateway = state.gateway();
    Envelope::ok(ModelsData {
        models: ModelGateway::available_models(),
        default: gateway.default_model().to_string(),
    })
}

/// GET {prefix}/ai/status
pub async fn handle_status(State(state): State<AppState>) -> Json<Envelope<ServiceStatus>> {
    Envelope::ok(state.gateway().status())
}

/// POST {prefix}/ai/career-path
pub async fn handle_career_path(
    State(state): State<AppState>,
    payload: Result<Json<CareerPathRequest>, JsonRejection>,
) -> Result<Json<Envelope<CareerPathData>>, AppError> {
    let Json(request) = payload?;
    validate_request(&request)?;

    let chat = ChatRequest::new(
        format!(
            "I need career path recommendations based on my profile:\n\
             Current Role: {}\nExperience: {}\nInterests: {}\nGoals: {}",
            request.current_role, request.experience, request.interests, request.goals
        ),
        SessionType::Analysis,
    );

    let recommendations = state.gateway().chat(&chat).await?;

    Ok(Envelope::ok(CareerPathData {
        recommendations,
        timestamp: Utc::now(),
    }))
}

/// POST {prefix}/ai/interview-prep
pub async fn handle_interview_prep(
    State(state): State<AppState>,
    payload: Result<Json<InterviewPrepRequest>, JsonRejection>,
) -> Result<Json<Envelope<InterviewPrepData>>, AppError> {
    let Json(request) = payload?;
    validate_request(&request)?;

    let analysis_request = JobAnalysisRequest {
        job_description: Some(request.job_description),
        user_profile: Some(request.user_profile),
        analysis_type: JobAnalysisType::InterviewPrep,
    };
    let preparation = state.gateway().analyze_job_fit(&analysis_request).await?;

    Ok(Envelope::ok(InterviewPrepData {
        preparation,
        interview_type: request.interview_type.unwrap_or_default(),
        timestamp: Utc::now(),
    }))
}

/// POST {prefix}/ai/skill-gap
pub async fn handle_skill_gap(
    State(state): State<AppState>,
    payload: Result<Json<SkillGapRequest>, JsonRejection>,
) -> Result<Json<Envelope<SkillGapData>>, AppError> {
    let Json(request) = payload?;
    validate_request(&request)?;

    let analysis_request = JobAnalysisRequest {
        job_description: Some(format!(
            "Target Role: {}\nRequired Skills: {}",
            request.target_role, request.desired_skills
        )),
        user_profile: Some(format!("Current Skills: {}", request.current_skills)),
        analysis_type: JobAnalysisType::SkillsGap,
    };
    let skill_gap_analysis = state.gateway().analyze_job_fit(&analysis_request).await?;

    Ok(Envelope::ok(SkillGapData {
        skill_gap_analysis,
        timestamp: Utc::now(),
    }))
}

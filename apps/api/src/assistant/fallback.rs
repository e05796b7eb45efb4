//! Fallback/Mock Generator: placeholder responses for when no provider
//! client is configured.
//!
//! Mock output has exactly the fields of the live output. Only the content
//! differs: it says it is a placeholder and points at `GEMINI_API_KEY`.

use chrono::Utc;
use rand::Rng;
use serde_json::{json, Map, Value};

use crate::assistant::normalizer::estimate_tokens;
use crate::assistant::prompts::PromptKind;
use crate::models::{AnalysisResult, ChatRequest, ChatResponse, HireDeskQuery, HireDeskResponse};

pub const MOCK_CONFIDENCE: f64 = 0.5;
const PREVIEW_CHARS: usize = 50;

pub const MOCK_CHAT_RESPONSE: &str =
    "I am a JobPsych AI assistant. Please configure GEMINI_API_KEY for full functionality.";

const MOCK_FACTORS: [&str; 3] = ["Communication", "Problem Solving", "Adaptability"];

/// Placeholder chat reply. `model` echoes the request, else the default model.
pub fn mock_chat(request: &ChatRequest, default_model: &str) -> ChatResponse {
    ChatResponse {
        response: MOCK_CHAT_RESPONSE.to_string(),
        model: request
            .model
            .clone()
            .unwrap_or_else(|| default_model.to_string()),
        tokens: Some(estimate_tokens(&format!(
            "{}{MOCK_CHAT_RESPONSE}",
            request.message
        ))),
        session_type: request.session_type,
    }
}

/// Placeholder analysis for the job or text analysis kinds.
///
/// `input` is the analysed text; only text analyses quote it back.
pub fn mock_analysis(kind: PromptKind, sub_kind: &str, input: &str) -> AnalysisResult {
    match kind {
        PromptKind::JobAnalysis => mock_job_analysis(sub_kind),
        _ => mock_text_analysis(input, sub_kind),
    }
}

fn mock_job_analysis(analysis_type: &str) -> AnalysisResult {
    let score: f64 = rand::thread_rng().gen_range(0.0..100.0);
    let result = json!({
        "analysis": format!(
            "Mock {analysis_type} analysis - Please configure GEMINI_API_KEY for real insights"
        ),
        "score": score,
        "factors": MOCK_FACTORS,
        "timestamp": Utc::now().to_rfc3339(),
    });

    AnalysisResult {
        analysis_type: analysis_type.to_string(),
        result: into_map(result),
        confidence: Some(MOCK_CONFIDENCE),
        insights: vec![
            "This is a demo insight".to_string(),
            "Configure API key for real analysis".to_string(),
        ],
        recommendations: vec![
            "Set up Gemini API key".to_string(),
            "Provide more detailed information".to_string(),
        ],
    }
}

fn mock_text_analysis(text: &str, analysis_type: &str) -> AnalysisResult {
    let preview: String = text.chars().take(PREVIEW_CHARS).collect();
    let result = json!({
        "analysisType": analysis_type,
        "content": format!("Mock {analysis_type} analysis of: {preview}..."),
        "timestamp": Utc::now().to_rfc3339(),
    });

    AnalysisResult {
        analysis_type: analysis_type.to_string(),
        result: into_map(result),
        confidence: Some(MOCK_CONFIDENCE),
        insights: vec!["Demo mode active".to_string()],
        recommendations: vec!["Configure GEMINI_API_KEY for full functionality".to_string()],
    }
}

/// Placeholder recruiter answer.
pub fn mock_recruiter(query: &HireDeskQuery) -> HireDeskResponse {
    HireDeskResponse {
        answer: format!(
            "I am a HireDesk AI assistant. Your {} query was received, but GEMINI_API_KEY is not \
             configured, so this is a placeholder answer.",
            query.query_type.as_str()
        ),
        query_type: query.query_type,
        suggestions: Some(vec![
            "Configure GEMINI_API_KEY for full functionality".to_string(),
        ]),
    }
}

fn into_map(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

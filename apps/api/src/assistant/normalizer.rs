//! Response Normalizer: reshapes raw model text into response structures.
//!
//! The insight/recommendation extraction is a plain substring heuristic:
//! case-sensitive, source order, first three matches, no dedup. It is not
//! semantic parsing and an empty list is a valid outcome.

use chrono::Utc;
use serde_json::{Map, Value};

use crate::assistant::prompts::PromptKind;
use crate::models::{AnalysisResult, ChatResponse, SessionType};

pub const MAX_EXTRACTED_LINES: usize = 3;
pub const JOB_ANALYSIS_CONFIDENCE: f64 = 0.85;
pub const TEXT_ANALYSIS_CONFIDENCE: f64 = 0.8;

const INSIGHT_MARKERS: &[&str] = &["insight", "important", "key"];
const RECOMMENDATION_MARKERS: &[&str] = &["recommend", "suggest", "should"];

/// Rough token count: one token per four characters, rounded up.
pub fn estimate_tokens(text: &str) -> u32 {
    let chars = text.chars().count() as u32;
    chars.div_ceil(4)
}

fn first_lines_containing(text: &str, markers: &[&str]) -> Vec<String> {
    text.split('\n')
        .filter(|line| markers.iter().any(|m| line.contains(m)))
        .take(MAX_EXTRACTED_LINES)
        .map(str::to_string)
        .collect()
}

/// First three lines mentioning "insight", "important" or "key".
pub fn extract_insights(text: &str) -> Vec<String> {
    first_lines_containing(text, INSIGHT_MARKERS)
}

/// First three lines mentioning "recommend", "suggest" or "should".
pub fn extract_recommendations(text: &str) -> Vec<String> {
    first_lines_containing(text, RECOMMENDATION_MARKERS)
}

/// Wraps a live chat completion. `prompt` is the full text sent to the model.
pub fn normalize_chat(
    raw_text: String,
    prompt: &str,
    model: String,
    session_type: SessionType,
) -> ChatResponse {
    let tokens = estimate_tokens(&format!("{prompt}{raw_text}"));
    ChatResponse {
        response: raw_text,
        model,
        tokens: Some(tokens),
        session_type,
    }
}

/// Wraps a live analysis completion for a job or text analysis kind.
///
/// Job analyses store the text under `analysis`; text analyses store it
/// under `content` alongside the analysis type. Both carry a timestamp.
pub fn normalize(raw_text: &str, kind: PromptKind, sub_kind: &str) -> AnalysisResult {
    let mut result = Map::new();
    let confidence = match kind {
        PromptKind::JobAnalysis => {
            result.insert("analysis".to_string(), Value::from(raw_text));
            JOB_ANALYSIS_CONFIDENCE
        }
        _ => {
            result.insert("analysisType".to_string(), Value::from(sub_kind));
            result.insert("content".to_string(), Value::from(raw_text));
            TEXT_ANALYSIS_CONFIDENCE
        }
    };
    result.insert(
        "timestamp".to_string(),
        Value::from(Utc::now().to_rfc3339()),
    );

    AnalysisResult {
        analysis_type: sub_kind.to_string(),
        result,
        confidence: Some(confidence),
        insights: extract_insights(raw_text),
        recommendations: extract_recommendations(raw_text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Overview of the role\n\
        A key strength is communication\n\
        You should highlight leadership\n\
        Important: practice STAR answers\n\
        Another insight about motivation\n\
        We recommend a mock interview\n\
        The key risk is burnout\n\
        I suggest a mentor\n\
        You should rest\n\
        Candidates should ask questions";

    #[test]
    fn test_insights_take_first_three_in_source_order() {
        let insights = extract_insights(SAMPLE);
        assert_eq!(
            insights,
            vec![
                "A key strength is communication",
                "Another insight about motivation",
                "The key risk is burnout",
            ]
        );
    }

    #[test]
    fn test_insight_match_is_case_sensitive() {
        // "Important:" starts with an upper-case I and does not match "important".
        let insights = extract_insights("Important: rest\nKEY point\nimportant detail");
        assert_eq!(insights, vec!["important detail"]);
    }

    #[test]
    fn test_recommendations_take_first_three() {
        let recs = extract_recommendations(SAMPLE);
        assert_eq!(
            recs,
            vec![
                "You should highlight leadership",
                "We recommend a mock interview",
                "I suggest a mentor",
            ]
        );
    }

    #[test]
    fn test_duplicates_are_kept() {
        let recs = extract_recommendations("you should\nyou should\nyou should\nyou should");
        assert_eq!(recs, vec!["you should"; 3]);
    }

    #[test]
    fn test_no_matches_gives_empty_lists() {
        assert!(extract_insights("Nothing to see").is_empty());
        assert!(extract_recommendations("").is_empty());
    }

    #[test]
    fn test_substring_inside_words_matches() {
        // "monkey" contains "key"; the heuristic is substring based.
        assert_eq!(extract_insights("a monkey"), vec!["a monkey"]);
    }

    #[test]
    fn test_estimate_tokens_rounds_up() {
        assert_eq!(estimate_tokens(""), 0);
        assert_eq!(estimate_tokens("abcd"), 1);
        assert_eq!(estimate_tokens("abcde"), 2);
        // counted in characters, not bytes
        assert_eq!(estimate_tokens("éééé"), 1);
    }

    #[test]
    fn test_normalize_chat_counts_prompt_and_response() {
        let response = normalize_chat(
            "1234".to_string(),
            "12345678",
            "gemini-2.5-flash".to_string(),
            SessionType::General,
        );
        assert_eq!(response.tokens, Some(3));
        assert_eq!(response.response, "1234");
        assert_eq!(response.session_type, SessionType::General);
    }

    #[test]
    fn test_normalize_job_analysis_shape() {
        let result = normalize("You should apply", PromptKind::JobAnalysis, "fit");
        assert_eq!(result.analysis_type, "fit");
        assert_eq!(result.confidence, Some(JOB_ANALYSIS_CONFIDENCE));
        assert_eq!(result.result["analysis"], "You should apply");
        assert!(result.result.contains_key("timestamp"));
        assert_eq!(result.recommendations, vec!["You should apply"]);
        assert!(result.insights.is_empty());
    }

    #[test]
    fn test_normalize_text_analysis_shape() {
        let result = normalize("Positive tone", PromptKind::TextAnalysis, "sentiment");
        assert_eq!(result.analysis_type, "sentiment");
        assert_eq!(result.confidence, Some(TEXT_ANALYSIS_CONFIDENCE));
        assert_eq!(result.result["content"], "Positive tone");
        assert_eq!(result.result["analysisType"], "sentiment");
    }
}

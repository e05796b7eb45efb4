//! Prompt Template Selector: maps (kind, sub-kind) to a system prompt and
//! builds the user-side message envelope.
//!
//! Both functions are total: an unknown or missing sub-kind falls through to
//! the kind's generic prompt.

use crate::llm_client::prompts::{
    BREVITY_INSTRUCTION, HIREDESK_PERSONA, JOBPSYCH_PERSONA, RESPONSE_GUIDELINES,
};
use crate::models::HireDeskQuery;

/// Top-level request classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Chat,
    JobAnalysis,
    TextAnalysis,
    RecruiterQuery,
}

impl PromptKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PromptKind::Chat => "chat",
            PromptKind::JobAnalysis => "job_analysis",
            PromptKind::TextAnalysis => "text_analysis",
            PromptKind::RecruiterQuery => "recruiter_query",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// System prompts
// ────────────────────────────────────────────────────────────────────────────

const COACHING_MODE: &str = "You are in coaching mode. Provide supportive, encouraging guidance \
    with actionable steps. Focus on motivation, goal-setting, and overcoming career challenges.";

const ANALYSIS_MODE: &str = "You are in analysis mode. Provide detailed, analytical insights \
    about job fit, skills gaps, career trajectories, and market trends. Be objective and data-driven.";

const GENERAL_MODE: &str = "Provide balanced guidance that combines psychological insights with \
    practical career advice. Be professional, empathetic, and solution-oriented.";

const JOB_ANALYSIS_ROLE: &str =
    "As JobPsych AI, analyze the following for career psychology insights.";

const TEXT_ANALYSIS_ROLE: &str = "As JobPsych AI, analyze this career-related content.";

fn job_analysis_task(sub_kind: Option<&str>) -> &'static str {
    match sub_kind {
        Some("fit") => "Analyze the psychological fit between this person and role. Consider \
            personality traits, work style, growth potential, and potential challenges.",
        Some("skills_gap") => "Identify skills gaps and provide a development roadmap with \
            psychological considerations for learning preferences and motivation.",
        Some("career_path") => "Suggest career progression paths considering psychological \
            factors like personality type, values, and long-term satisfaction.",
        Some("interview_prep") => "Provide interview preparation advice focusing on \
            psychological strategies to reduce anxiety, present authentically, and demonstrate fit.",
        _ => "Provide general career guidance based on the provided information.",
    }
}

fn text_analysis_task(sub_kind: Option<&str>) -> &'static str {
    match sub_kind {
        Some("sentiment") => "Analyze the emotional tone and psychological state reflected in \
            this text. Consider stress levels, confidence, motivation, and career satisfaction.",
        Some("summary") => "Summarize the key career and psychological themes, highlighting \
            important insights about the person's professional situation.",
        Some("keywords") => "Extract key career-related terms, psychological indicators, and \
            professional themes. Focus on skills, motivations, concerns, and opportunities.",
        _ => "Provide comprehensive analysis with career psychology insights.",
    }
}

fn recruiter_task(sub_kind: Option<&str>) -> Option<&'static str> {
    let task = match sub_kind {
        Some("screening") => {
            "Your task: Help recruiters screen candidates effectively.
- Suggest relevant screening questions
- Identify key qualifications to look for
- Highlight red flags or positive indicators
- Provide objective evaluation criteria
Be concise and data-driven."
        }
        Some("interview_questions") => {
            "Your task: Generate relevant interview questions for the role.
- Create role-specific technical and behavioral questions
- Include questions to assess cultural fit
- Suggest follow-up questions for deeper insights
- Balance technical skills with soft skills assessment
Provide 5-7 well-structured questions with brief explanations."
        }
        Some("job_posting") => {
            "Your task: Optimize job postings for clarity and appeal.
- Improve job descriptions for better candidate engagement
- Suggest compelling language that attracts top talent
- Ensure clarity on requirements and responsibilities
- Optimize for inclusivity and accessibility
- Balance being comprehensive with being concise
Provide specific, actionable recommendations."
        }
        Some("candidate_match") => {
            "Your task: Analyze candidate-role fit.
- Evaluate how well candidate qualifications match role requirements
- Identify strengths and potential gaps
- Assess experience relevance
- Provide objective scoring or rating if possible
- Suggest areas for further evaluation in interviews
Be balanced and evidence-based in your assessment."
        }
        _ => return None,
    };
    Some(task)
}

/// Returns the system prompt for a request kind and its sub-kind
/// (session type, analysis type or query type).
pub fn select_system_prompt(kind: PromptKind, sub_kind: Option<&str>) -> String {
    match kind {
        PromptKind::Chat => {
            let mode = match sub_kind {
                Some("coaching") => COACHING_MODE,
                Some("analysis") => ANALYSIS_MODE,
                _ => GENERAL_MODE,
            };
            format!("{JOBPSYCH_PERSONA}\n\n{RESPONSE_GUIDELINES}\n\n{mode}")
        }
        PromptKind::JobAnalysis => format!(
            "{JOB_ANALYSIS_ROLE} {BREVITY_INSTRUCTION} Be direct and actionable.\n\n{}",
            job_analysis_task(sub_kind)
        ),
        PromptKind::TextAnalysis => format!(
            "{TEXT_ANALYSIS_ROLE} {BREVITY_INSTRUCTION} Be direct and insightful.\n\n{}",
            text_analysis_task(sub_kind)
        ),
        PromptKind::RecruiterQuery => match recruiter_task(sub_kind) {
            Some(task) => format!("{HIREDESK_PERSONA}\n\n{task}"),
            None => HIREDESK_PERSONA.to_string(),
        },
    }
}

// ────────────────────────────────────────────────────────────────────────────
// User message envelope
// ────────────────────────────────────────────────────────────────────────────

const NOT_PROVIDED: &str = "Not provided";

/// The caller-supplied fields of one request, tagged by kind.
#[derive(Debug, Clone, Copy)]
pub enum UserMessage<'a> {
    Chat {
        message: &'a str,
        context: Option<&'a str>,
        session_type: &'a str,
    },
    JobAnalysis {
        job_description: Option<&'a str>,
        user_profile: Option<&'a str>,
        analysis_type: &'a str,
    },
    TextAnalysis {
        text: &'a str,
        analysis_type: &'a str,
    },
    RecruiterQuery(&'a HireDeskQuery),
}

impl UserMessage<'_> {
    pub fn kind(&self) -> PromptKind {
        match self {
            UserMessage::Chat { .. } => PromptKind::Chat,
            UserMessage::JobAnalysis { .. } => PromptKind::JobAnalysis,
            UserMessage::TextAnalysis { .. } => PromptKind::TextAnalysis,
            UserMessage::RecruiterQuery(_) => PromptKind::RecruiterQuery,
        }
    }

    pub fn sub_kind(&self) -> &str {
        match self {
            UserMessage::Chat { session_type, .. } => session_type,
            UserMessage::JobAnalysis { analysis_type, .. } => analysis_type,
            UserMessage::TextAnalysis { analysis_type, .. } => analysis_type,
            UserMessage::RecruiterQuery(query) => query.query_type.as_str(),
        }
    }
}

/// Concatenates the request fields into a single message. The last line
/// always names the requested session/analysis/query type.
pub fn build_user_message(fields: &UserMessage<'_>) -> String {
    match *fields {
        UserMessage::Chat {
            message,
            context,
            session_type,
        } => format!(
            "User Query: {message}\n\nContext: {}\n\nSession type: {session_type}",
            context.unwrap_or("No additional context provided")
        ),
        UserMessage::JobAnalysis {
            job_description,
            user_profile,
            analysis_type,
        } => {
            let (role_label, profile_label) = if analysis_type == "career_path" {
                ("Current Role/Interest", "User Background")
            } else {
                ("Job Description", "User Profile")
            };
            format!(
                "{role_label}: {}\n{profile_label}: {}\n\nRequested analysis: {analysis_type}",
                job_description.unwrap_or(NOT_PROVIDED),
                user_profile.unwrap_or(NOT_PROVIDED)
            )
        }
        UserMessage::TextAnalysis {
            text,
            analysis_type,
        } => format!("\"{text}\"\n\nRequested analysis: {analysis_type}"),
        UserMessage::RecruiterQuery(query) => {
            let mut message = format!("Query: {}\n\n", query.query);
            if let Some(role) = &query.job_role {
                message.push_str(&format!("Job Role: {role}\n"));
            }
            if let Some(info) = &query.candidate_info {
                message.push_str(&format!("Candidate Information:\n{info}\n\n"));
            }
            if let Some(context) = &query.context {
                message.push_str(&format!("Additional Context: {context}\n"));
            }
            message.push_str(&format!(
                "\nPlease provide a detailed, actionable response for this {} query.",
                query.query_type.as_str()
            ));
            message
        }
    }
}

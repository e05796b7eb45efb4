use serde::{Deserialize, Serialize};
use validator::Validate;

/// Chat mode. Drives the JobPsych system prompt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionType {
    Coaching,
    Analysis,
    #[default]
    General,
}

impl SessionType {
    #[cfg(test)]
    pub const ALL: [SessionType; 3] = [
        SessionType::Coaching,
        SessionType::Analysis,
        SessionType::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SessionType::Coaching => "coaching",
            SessionType::Analysis => "analysis",
            SessionType::General => "general",
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ChatRequest {
    #[validate(length(min = 1, max = 2000))]
    pub message: String,
    #[validate(length(min = 1))]
    pub context: Option<String>,
    #[validate(length(min = 1))]
    pub model: Option<String>,
    #[serde(default)]
    pub session_type: SessionType,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>, session_type: SessionType) -> Self {
        Self {
            message: message.into(),
            context: None,
            model: None,
            session_type,
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub response: String,
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokens: Option<u32>,
    pub session_type: SessionType,
}

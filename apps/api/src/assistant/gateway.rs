//! Model Gateway: owns the live/mock decision and the single provider call.
//!
//! Entry points never fail because configuration is missing: without a
//! client they answer from the fallback generator. With a client, each
//! request makes exactly one generation call and a failure is returned to
//! the caller as-is, classified. A live failure never turns into a mock.

use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info, warn};

use crate::assistant::errors::GatewayError;
use crate::assistant::fallback;
use crate::assistant::normalizer::{self, extract_recommendations};
use crate::assistant::prompts::{build_user_message, select_system_prompt, UserMessage};
use crate::config::GatewayConfig;
use crate::llm_client::{GeminiClient, GenerativeModel, ProviderError};
use crate::models::{
    AnalysisResult, ChatRequest, ChatResponse, ConnectionStatus, HireDeskQuery,
    HireDeskResponse, JobAnalysisRequest, ServiceStatus,
};

/// Value shipped in `.env.example`; treated the same as a missing key.
pub const PLACEHOLDER_API_KEY: &str = "your-gemini-api-key-here";

/// Hand-maintained; not queried from the provider.
pub const AVAILABLE_MODELS: [&str; 4] = [
    "gemini-1.5-flash",
    "gemini-1.5-pro",
    "gemini-1.0-pro",
    "gemini-2.5-flash",
];

pub const PROVIDER_NAME: &str = "Google Gemini";
const FEATURES: [&str; 3] = [
    "JobPsych Coaching",
    "Career Analysis",
    "Psychological Insights",
];
const LOGGED_PROMPT_CHARS: usize = 100;
const PROBE_PREVIEW_CHARS: usize = 50;

/// Outcome of a live connectivity probe.
#[derive(Debug, Clone)]
pub struct ProbeReport {
    pub connected: bool,
    pub suggestions: Vec<String>,
}

pub struct ModelGateway {
    config: GatewayConfig,
    model: Option<Arc<dyn GenerativeModel>>,
}

impl ModelGateway {
    /// Builds the gateway from configuration. Never fails: a missing or
    /// placeholder key, or a client that cannot be built, leaves the gateway
    /// without a client.
    pub fn initialize(config: GatewayConfig) -> Self {
        info!(
            has_api_key = !config.api_key.is_empty(),
            api_key_length = config.api_key.len(),
            model = %config.default_model,
            "Initializing AI service"
        );

        if config.api_key.is_empty() || config.api_key == PLACEHOLDER_API_KEY {
            warn!("GEMINI_API_KEY not configured properly. AI features will run in mock mode.");
            return Self {
                config,
                model: None,
            };
        }

        match GeminiClient::new(config.api_key.clone(), config.default_model.clone()) {
            Ok(client) => {
                info!(model = %config.default_model, "Google Gemini client initialized");
                Self::with_model(config, Arc::new(client))
            }
            Err(e) => {
                error!(error = %e, "Failed to initialize Google Gemini client");
                Self {
                    config,
                    model: None,
                }
            }
        }
    }

    /// Builds a gateway around an already constructed model.
    pub fn with_model(config: GatewayConfig, model: Arc<dyn GenerativeModel>) -> Self {
        Self {
            config,
            model: Some(model),
        }
    }

    pub fn has_key(&self) -> bool {
        self.model.is_some()
    }

    pub fn default_model(&self) -> &str {
        &self.config.default_model
    }

    /// Length of the configured key. The key itself is never exposed.
    pub fn api_key_length(&self) -> usize {
        self.config.api_key.len()
    }

    pub fn available_models() -> Vec<String> {
        AVAILABLE_MODELS.iter().map(|m| m.to_string()).collect()
    }

    pub fn status(&self) -> ServiceStatus {
        ServiceStatus {
            status: if self.has_key() {
                ConnectionStatus::Connected
            } else {
                ConnectionStatus::NotConfigured
            },
            provider: PROVIDER_NAME,
            models: Self::available_models(),
            default_model: self.config.default_model.clone(),
            features: FEATURES.to_vec(),
            last_check: Utc::now(),
        }
    }

    pub async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, GatewayError> {
        info!(
            model = ?request.model,
            session_type = request.session_type.as_str(),
            "Processing JobPsych chat request"
        );

        let Some(model) = &self.model else {
            return Ok(fallback::mock_chat(request, &self.config.default_model));
        };

        let fields = UserMessage::Chat {
            message: &request.message,
            context: request.context.as_deref(),
            session_type: request.session_type.as_str(),
        };
        let (prompt, text) = self.generate(model.as_ref(), &fields).await?;

        let model_name = request
            .model
            .clone()
            .unwrap_or_else(|| self.config.default_model.clone());
        Ok(normalizer::normalize_chat(
            text,
            &prompt,
            model_name,
            request.session_type,
        ))
    }

    pub async fn analyze_job_fit(
        &self,
        request: &JobAnalysisRequest,
    ) -> Result<AnalysisResult, GatewayError> {
        let analysis_type = request.analysis_type.as_str();
        info!(analysis_type, "Analyzing job fit with JobPsych AI");

        let fields = UserMessage::JobAnalysis {
            job_description: request.job_description.as_deref(),
            user_profile: request.user_profile.as_deref(),
            analysis_type,
        };
        self.analyze(&fields, "job fit", "").await
    }

    /// `analysis_type` is normally one of sentiment/summary/keywords; any other
    /// value gets the generic analysis prompt and is echoed back as the type.
    pub async fn analyze_text(
        &self,
        text: &str,
        analysis_type: &str,
    ) -> Result<AnalysisResult, GatewayError> {
        info!(
            analysis_type,
            length = text.chars().count(),
            "Analyzing text with JobPsych context"
        );

        let fields = UserMessage::TextAnalysis {
            text,
            analysis_type,
        };
        self.analyze(&fields, "text", text).await
    }

    /// Answers a recruiter query. Cross-field validation is the caller's job
    /// (see `hiredesk::validation`). Failures are classified like chat.
    pub async fn recruiter_query(
        &self,
        query: &HireDeskQuery,
    ) -> Result<HireDeskResponse, GatewayError> {
        info!(query_type = query.query_type.as_str(), "Processing HireDesk query");

        let Some(model) = &self.model else {
            return Ok(fallback::mock_recruiter(query));
        };

        let fields = UserMessage::RecruiterQuery(query);
        let (_, text) = self.generate(model.as_ref(), &fields).await?;

        Ok(HireDeskResponse {
            suggestions: Some(extract_recommendations(&text)),
            answer: text,
            query_type: query.query_type,
        })
    }

    /// Sends one tiny generation to check connectivity. Does nothing without a client.
    pub async fn probe(&self) -> ProbeReport {
        let Some(model) = &self.model else {
            return ProbeReport {
                connected: false,
                suggestions: vec!["Cannot test API - no API key provided".to_string()],
            };
        };

        match model.generate("", "Hello").await {
            Ok(text) => {
                let preview: String = text.chars().take(PROBE_PREVIEW_CHARS).collect();
                ProbeReport {
                    connected: true,
                    suggestions: vec![
                        "API connection successful".to_string(),
                        format!("Test response: {preview}..."),
                    ],
                }
            }
            Err(e) => {
                error!(status = ?e.status, error = %e, "API diagnosis failed");
                let suggestion = match e.status {
                    Some(401) => "API key is invalid - please check your GEMINI_API_KEY".to_string(),
                    Some(403) => "API key doesn't have permission - check your Google AI Studio settings"
                        .to_string(),
                    Some(503) => "Google Gemini service is temporarily unavailable".to_string(),
                    Some(429) => "Rate limit exceeded - please wait before trying again".to_string(),
                    _ => format!("API test failed: {}", e.message),
                };
                ProbeReport {
                    connected: false,
                    suggestions: vec![suggestion],
                }
            }
        }
    }

    async fn analyze(
        &self,
        fields: &UserMessage<'_>,
        resource: &'static str,
        input: &str,
    ) -> Result<AnalysisResult, GatewayError> {
        let kind = fields.kind();
        let sub_kind = fields.sub_kind();

        let Some(model) = &self.model else {
            return Ok(fallback::mock_analysis(kind, sub_kind, input));
        };

        let (_, text) = self
            .generate(model.as_ref(), fields)
            .await
            .map_err(|source| GatewayError::AnalysisFailed { resource, source })?;

        Ok(normalizer::normalize(&text, kind, sub_kind))
    }

    /// One provider call. Returns the full prompt text (for token estimates)
    /// alongside the model output.
    async fn generate(
        &self,
        model: &dyn GenerativeModel,
        fields: &UserMessage<'_>,
    ) -> Result<(String, String), ProviderError> {
        let kind = fields.kind();
        let sub_kind = fields.sub_kind();
        let system = select_system_prompt(kind, Some(sub_kind));
        let message = build_user_message(fields);

        match model.generate(&system, &message).await {
            Ok(text) => Ok((format!("{system}\n\n{message}"), text)),
            Err(e) => {
                error!(
                    kind = kind.as_str(),
                    sub_kind,
                    status = ?e.status,
                    error = %e,
                    prompt = %truncate_for_log(&message),
                    model = model.model_name(),
                    "Gemini request failed"
                );
                Err(e)
            }
        }
    }
}

fn truncate_for_log(text: &str) -> String {
    let head: String = text.chars().take(LOGGED_PROMPT_CHARS).collect();
    format!("{head}...")
}

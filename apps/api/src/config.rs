use anyhow::{Context, Result};

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_CORS_ORIGINS: &[&str] = &["https://jobpsych.vercel.app", "http://localhost:3000"];

/// Application configuration loaded from environment variables.
/// Nothing here is required: a missing `GEMINI_API_KEY` puts the gateway in mock mode.
#[derive(Clone)]
pub struct Config {
    pub port: u16,
    pub api_prefix: String,
    pub gemini_api_key: String,
    pub ai_model: String,
    pub app_env: String,
    pub cors_origins: Vec<String>,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            api_prefix: env_or("API_PREFIX", "/api"),
            gemini_api_key: env_or("GEMINI_API_KEY", ""),
            ai_model: env_or("AI_MODEL", DEFAULT_MODEL),
            app_env: std::env::var("APP_ENV")
                .or_else(|_| std::env::var("NODE_ENV"))
                .unwrap_or_else(|_| "development".to_string()),
            cors_origins: std::env::var("CORS_ORIGINS")
                .map(|raw| parse_origins(&raw))
                .unwrap_or_else(|_| DEFAULT_CORS_ORIGINS.iter().map(|s| s.to_string()).collect()),
            rust_log: std::env::var("RUST_LOG")
                .or_else(|_| std::env::var("LOG_LEVEL"))
                .unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// The subset of configuration the model gateway is built from.
    pub fn gateway(&self) -> GatewayConfig {
        GatewayConfig {
            api_key: self.gemini_api_key.clone(),
            default_model: self.ai_model.clone(),
        }
    }
}

/// Provider credentials and default model. Read once at startup and again on re-initialize.
#[derive(Clone)]
pub struct GatewayConfig {
    pub api_key: String,
    pub default_model: String,
}

// The key never reaches logs: Debug output carries only its length.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("port", &self.port)
            .field("api_prefix", &self.api_prefix)
            .field("gemini_api_key_len", &self.gemini_api_key.len())
            .field("ai_model", &self.ai_model)
            .field("app_env", &self.app_env)
            .field("cors_origins", &self.cors_origins)
            .field("rust_log", &self.rust_log)
            .finish()
    }
}

impl std::fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("api_key_len", &self.api_key.len())
            .field("default_model", &self.default_model)
            .finish()
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            default_model: DEFAULT_MODEL.to_string(),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

use config::Environment as EnvironmentSource;
use config::{Config, ConfigError, File};
use serde::Deserialize;

use crate::infrastructure::llm::{DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL};

use super::Environment;

pub const DEFAULT_QUIZ_COUNT: i64 = 5;
const DEFAULT_MAX_UPLOAD_SIZE_BYTES: i64 = 50 * 1024 * 1024;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub llm: LlmSettings,
    pub generation: GenerationSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// `*` allows any origin; anything else is the single allowed origin.
    pub allowed_origin: String,
    pub max_upload_size_bytes: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmProvider {
    Gemini,
    Mock,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    pub provider: LlmProvider,
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerationSettings {
    pub default_quiz_count: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Settings {
    /// Layers built-in defaults, `appsettings.{env}.toml` (optional) and
    /// `APP_`-prefixed variables such as `APP_LLM__API_KEY`.
    ///
    /// `GOOGLE_API_KEY` and `ALLOWED_ORIGIN` fill in when the layered
    /// values leave them unset.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        let mut settings: Settings = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000_i64)?
            .set_default("server.allowed_origin", "*")?
            .set_default("server.max_upload_size_bytes", DEFAULT_MAX_UPLOAD_SIZE_BYTES)?
            .set_default("llm.provider", "gemini")?
            .set_default("llm.api_key", "")?
            .set_default("llm.base_url", DEFAULT_GEMINI_BASE_URL)?
            .set_default("llm.model", DEFAULT_GEMINI_MODEL)?
            .set_default("generation.default_quiz_count", DEFAULT_QUIZ_COUNT)?
            .set_default("logging.level", "info")?
            .set_default("logging.enable_json", false)?
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(
                EnvironmentSource::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        if settings.llm.api_key.is_empty() {
            if let Ok(key) = std::env::var("GOOGLE_API_KEY") {
                settings.llm.api_key = key;
            }
        }

        if settings.server.allowed_origin == "*" {
            if let Ok(origin) = std::env::var("ALLOWED_ORIGIN") {
                settings.server.allowed_origin = origin;
            }
        }

        Ok(settings)
    }
}

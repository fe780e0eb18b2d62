use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;

pub const API_KEY_ENV_VAR: &str = "GEMINI_API_KEY";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub llm: LlmSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_upload_mb: usize,
    pub static_dir: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    #[serde(default)]
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeout_secs: u64,
    #[serde(default)]
    pub temperature: Option<f32>,
    #[serde(default)]
    pub max_output_tokens: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl ServerSettings {
    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_mb * 1024 * 1024
    }
}

impl Settings {
    /// Layers defaults, `appsettings.<env>.toml`, `APP__*` variables and
    /// finally `GEMINI_API_KEY`.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        let builder = Self::defaults()?
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str().to_lowercase()))
                    .required(false),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("llm.api_key", std::env::var(API_KEY_ENV_VAR).ok())?;

        builder.build()?.try_deserialize()
    }

    /// Builder preloaded with the built-in defaults.
    pub fn defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            .set_default("server.max_upload_mb", 16)?
            .set_default("server.static_dir", "static")?
            .set_default("llm.model", "gemini-2.0-flash")?
            .set_default(
                "llm.base_url",
                crate::infrastructure::llm::DEFAULT_GEMINI_BASE_URL,
            )?
            .set_default("llm.timeout_secs", 60)?
            .set_default("logging.level", "info")?
            .set_default("logging.enable_json", false)
    }
}

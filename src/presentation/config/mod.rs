mod environment;
mod scaffold_config;
mod settings;

pub use environment::{ENVIRONMENT_ENV_VAR, Environment};
pub use scaffold_config::ScaffoldConfig;
pub use settings::{API_KEY_ENV_VAR, LlmSettings, LoggingSettings, ServerSettings, Settings};

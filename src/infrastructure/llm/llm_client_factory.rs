use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::LlmClient;
use crate::presentation::config::{LlmSettings, ScaffoldConfig};

use super::gemini_client::{GeminiClient, GenerationConfig};
use super::mock_llm_client::MockLlmClient;

pub struct LlmClientFactory;

#[derive(Debug, thiserror::Error)]
pub enum LlmClientFactoryError {
    #[error("missing API key: the Gemini client requires GEMINI_API_KEY")]
    MissingApiKey,
    #[error("model initialization failed: {0}")]
    InitializationFailed(String),
}

impl LlmClientFactory {
    pub fn create(
        settings: &LlmSettings,
        scaffold: &ScaffoldConfig,
    ) -> Result<Arc<dyn LlmClient>, LlmClientFactoryError> {
        if scaffold.enabled {
            tracing::info!(
                delay_ms = scaffold.mock_response_delay_ms,
                "Scaffold mode: using mock model"
            );
            return Ok(Arc::new(MockLlmClient::new(Duration::from_millis(
                scaffold.mock_response_delay_ms,
            ))));
        }

        let key = settings
            .api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or(LlmClientFactoryError::MissingApiKey)?;

        tracing::info!(model = %settings.model, base_url = %settings.base_url, "Loading Gemini model");
        let client = GeminiClient::new(
            &settings.base_url,
            &settings.model,
            key,
            Duration::from_secs(settings.timeout_secs),
        )
        .map_err(|e| LlmClientFactoryError::InitializationFailed(e.to_string()))?
        .with_generation_config(GenerationConfig {
            temperature: settings.temperature,
            max_output_tokens: settings.max_output_tokens,
        });

        Ok(Arc::new(client))
    }
}

use std::sync::Arc;

use crate::application::ports::{LlmClient, LlmClientError};
use crate::domain::text_limit::cap_prompt;
use crate::domain::{AnalysisType, DocType};

use super::prompt_templates::{analysis_template, assemble_prompt, draft_template};

/// Dispatches analysis and drafting requests to the language model.
///
/// The model client is fixed at construction. When it is absent (no API key or
/// a failed initialisation) every call answers with the "model not available"
/// message instead of failing.
pub struct LegalAssistantService {
    llm_client: Option<Arc<dyn LlmClient>>,
}

impl LegalAssistantService {
    pub fn new(llm_client: Option<Arc<dyn LlmClient>>) -> Self {
        Self { llm_client }
    }

    pub fn model_available(&self) -> bool {
        self.llm_client.is_some()
    }

    /// Builds the analysis prompt for `text`, capped at the prompt limit.
    pub fn analysis_prompt(text: &str, analysis_type: AnalysisType) -> String {
        cap_prompt(assemble_prompt(analysis_template(analysis_type), text))
    }

    /// Builds the drafting prompt. Requirements are not length-capped.
    pub fn draft_prompt(doc_type: DocType, requirements: &str) -> String {
        assemble_prompt(draft_template(doc_type), requirements)
    }

    #[tracing::instrument(skip(self, text), fields(text_len = text.chars().count()))]
    pub async fn analyze(&self, text: &str, analysis_type: AnalysisType) -> String {
        let result = self
            .generate(|| Self::analysis_prompt(text, analysis_type))
            .await;
        render(result, "analyzing")
    }

    #[tracing::instrument(skip(self, requirements), fields(requirements_len = requirements.chars().count()))]
    pub async fn draft(&self, doc_type: DocType, requirements: &str) -> String {
        let result = self
            .generate(|| Self::draft_prompt(doc_type, requirements))
            .await;
        render(result, "drafting")
    }

    async fn generate(
        &self,
        build_prompt: impl FnOnce() -> String,
    ) -> Result<String, AssistantError> {
        let llm_client = self
            .llm_client
            .as_ref()
            .ok_or(AssistantError::ModelUnavailable)?;

        let prompt = build_prompt();
        tracing::debug!(prompt_len = prompt.chars().count(), "Sending prompt to model");

        let response = llm_client
            .generate(&prompt)
            .await
            .map_err(AssistantError::GenerationFailed)?;

        if response.trim().is_empty() {
            return Err(AssistantError::EmptyResponse);
        }

        tracing::info!(response_len = response.chars().count(), "Model response received");
        Ok(response)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AssistantError {
    #[error("Error: Gemini model not available. Please check your API key.")]
    ModelUnavailable,
    #[error("generation failed: {0}")]
    GenerationFailed(LlmClientError),
    #[error("Error: No response generated from the AI model. Please try again.")]
    EmptyResponse,
}

fn render(result: Result<String, AssistantError>, action: &str) -> String {
    match result {
        Ok(text) => text,
        Err(AssistantError::GenerationFailed(e)) => {
            tracing::error!(error = %e, action, "Model call failed");
            format!("Error {action} document: {e}. Please check your API key and try again.")
        }
        Err(e) => {
            tracing::warn!(error = %e, action, "No model output");
            e.to_string()
        }
    }
}

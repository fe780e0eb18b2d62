use std::time::Duration;

use crate::application::ports::{LlmClient, LlmClientError};

/// Canned model used in scaffold mode; answers without any network call.
pub struct MockLlmClient {
    delay: Duration,
}

impl MockLlmClient {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for MockLlmClient {
    fn default() -> Self {
        Self::new(Duration::ZERO)
    }
}

#[async_trait::async_trait]
impl LlmClient for MockLlmClient {
    async fn generate(&self, prompt: &str) -> Result<String, LlmClientError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        Ok(format!(
            "## SCAFFOLD RESPONSE\n\nThis is a mock answer. The prompt contained {} characters.",
            prompt.chars().count()
        ))
    }
}

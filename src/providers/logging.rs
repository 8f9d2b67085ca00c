use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;

use super::Provider;
use crate::error::RecipeError;

/// Wraps a provider and records timing and payload sizes for every call.
/// Prompts and replies are never logged verbatim.
pub struct LoggingProvider {
    inner: Arc<dyn Provider>,
}

impl LoggingProvider {
    pub fn new(inner: Arc<dyn Provider>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl Provider for LoggingProvider {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn generate(&self, prompt: &str) -> Result<String, RecipeError> {
        let start = Instant::now();
        let result = self.inner.generate(prompt).await;
        let duration = start.elapsed();

        match &result {
            Ok(reply) => tracing::debug!(
                provider = self.inner.name(),
                duration_ms = %duration.as_millis(),
                prompt_len = prompt.len(),
                reply_len = reply.len(),
                "model call completed"
            ),
            Err(e) => tracing::error!(
                provider = self.inner.name(),
                duration_ms = %duration.as_millis(),
                error = %e,
                "model call failed"
            ),
        }

        result
    }
}

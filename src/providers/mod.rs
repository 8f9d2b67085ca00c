pub mod gemini;
pub mod logging;

#[cfg(test)]
pub(crate) mod scripted;

use async_trait::async_trait;

use crate::error::RecipeError;

pub use gemini::GeminiProvider;
pub use logging::LoggingProvider;

/// Extension point for language-model backends. One of only two `dyn Trait`
/// boundaries in the project (with `Handler`). Passed in explicitly to the
/// classifier and every handler.
#[async_trait]
pub trait Provider: Send + Sync {
    fn name(&self) -> &str;

    /// Submit a single prompt and return the model's reply text.
    async fn generate(&self, prompt: &str) -> Result<String, RecipeError>;
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecipeError {
    #[error("failed to load config: {0}")]
    ConfigLoad(String),

    #[error("invalid config: {0}")]
    ConfigValidation(String),

    #[error("GOOGLE_API_KEY is not set")]
    MissingApiKey,

    #[error("provider error: {0}")]
    Provider(String),
}

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use recipe_assistant::config::Config;
use recipe_assistant::providers::{GeminiProvider, LoggingProvider, Provider};
use recipe_assistant::repl;
use recipe_assistant::session::Session;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("recipe_assistant=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env().context("failed to load configuration")?;
    tracing::info!(model = %config.model, base_url = %config.base_url, "configuration loaded");

    let gemini: Arc<dyn Provider> = Arc::new(GeminiProvider::from_config(config));
    let provider: Arc<dyn Provider> = Arc::new(LoggingProvider::new(gemini));

    let mut session = Session::new(provider);
    tracing::info!(session = %session.id(), "session started");

    repl::run(&mut session).await
}

use std::sync::Arc;

use tracing::Instrument;
use uuid::Uuid;

use crate::context::SessionContext;
use crate::error::RecipeError;
use crate::intent;
use crate::providers::Provider;
use crate::router;

pub const BANNER: &str = "Recipe Agent Ready!";
pub const FAREWELL: &str = "Goodbye!";

/// Inputs that end the session, compared case-insensitively.
pub const EXIT_KEYWORDS: &[&str] = &["quit", "exit"];

/// How a raw input line should be treated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input<'a> {
    Exit,
    Empty,
    Query(&'a str),
}

impl<'a> Input<'a> {
    pub fn parse(line: &'a str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            Self::Empty
        } else if EXIT_KEYWORDS
            .iter()
            .any(|kw| trimmed.eq_ignore_ascii_case(kw))
        {
            Self::Exit
        } else {
            Self::Query(trimmed)
        }
    }
}

/// Outcome of feeding one line to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Print the response and wait for the next line.
    Reply(String),
    /// Blank input, nothing to print.
    Skip,
    /// Print the farewell and stop reading.
    Exit(&'static str),
}

/// A single-user conversation. Owns the running context and the provider
/// every turn goes through.
pub struct Session {
    id: Uuid,
    provider: Arc<dyn Provider>,
    context: SessionContext,
    turns: u64,
}

impl Session {
    pub fn new(provider: Arc<dyn Provider>) -> Self {
        Self::with_context(provider, SessionContext::default())
    }

    pub fn with_context(provider: Arc<dyn Provider>, context: SessionContext) -> Self {
        Self {
            id: Uuid::now_v7(),
            provider,
            context,
            turns: 0,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    /// Number of turns that completed and were merged into the context.
    pub fn turns(&self) -> u64 {
        self.turns
    }

    /// Classify and dispatch one line. Exit keywords and blank lines never
    /// reach the provider.
    pub async fn handle_line(&mut self, line: &str) -> Result<Step, RecipeError> {
        match Input::parse(line) {
            Input::Exit => Ok(Step::Exit(FAREWELL)),
            Input::Empty => Ok(Step::Skip),
            Input::Query(utterance) => self.turn(utterance).await.map(Step::Reply),
        }
    }

    /// Run one classify, route, handle, merge cycle and return the response.
    ///
    /// On provider failure the error is returned and the context is left as
    /// it was before the turn.
    pub async fn turn(&mut self, utterance: &str) -> Result<String, RecipeError> {
        let span = tracing::info_span!("turn", session = %self.id, turn = self.turns + 1);
        async {
            tracing::debug!(utterance_len = utterance.len(), "turn started");

            let intent = intent::classify(self.provider.as_ref(), utterance).await?;
            let handler = router::route(&intent);
            tracing::info!(intent = intent.label(), handler = handler.name(), "routed");

            let result = handler
                .handle(self.provider.as_ref(), utterance, &self.context)
                .await?;

            self.context = self.context.merge(utterance, &result);
            self.turns += 1;
            tracing::debug!(
                has_dish = self.context.last_dish.is_some(),
                ingredients = self.context.last_ingredients.len(),
                "context merged"
            );

            Ok::<_, RecipeError>(result.response)
        }
        .instrument(span)
        .await
    }
}

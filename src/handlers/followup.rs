use async_trait::async_trait;

use super::{CLARIFY_MESSAGE, Handler};
use crate::context::{SessionContext, TurnResult};
use crate::error::RecipeError;
use crate::prompts;
use crate::providers::Provider;

/// Conversational answer to a question about the dish already on the table.
/// Also the destination for any intent the classifier could not name.
pub struct FollowupResolver;

#[async_trait]
impl Handler for FollowupResolver {
    fn name(&self) -> &'static str {
        "followup_resolver"
    }

    async fn handle(
        &self,
        provider: &dyn Provider,
        utterance: &str,
        context: &SessionContext,
    ) -> Result<TurnResult, RecipeError> {
        let Some(dish) = context.last_dish.as_deref() else {
            return Ok(TurnResult::reply(CLARIFY_MESSAGE));
        };

        let reply = provider
            .generate(&prompts::followup(dish, utterance.trim()))
            .await?;
        Ok(TurnResult::reply(reply))
    }
}

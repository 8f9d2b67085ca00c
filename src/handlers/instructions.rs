use async_trait::async_trait;

use super::{Handler, NEED_DISH_MESSAGE};
use crate::context::{SessionContext, TurnResult};
use crate::error::RecipeError;
use crate::prompts;
use crate::providers::Provider;

/// Step-by-step instructions for the dish last discussed.
pub struct InstructionFetcher;

#[async_trait]
impl Handler for InstructionFetcher {
    fn name(&self) -> &'static str {
        "instruction_fetcher"
    }

    async fn handle(
        &self,
        provider: &dyn Provider,
        _utterance: &str,
        context: &SessionContext,
    ) -> Result<TurnResult, RecipeError> {
        let Some(dish) = context.last_dish.as_deref() else {
            return Ok(TurnResult::reply(NEED_DISH_MESSAGE));
        };

        let reply = provider.generate(&prompts::instructions(dish)).await?;
        Ok(TurnResult::reply(reply))
    }
}

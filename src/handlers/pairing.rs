use async_trait::async_trait;

use super::Handler;
use crate::context::{SessionContext, TurnResult};
use crate::error::RecipeError;
use crate::prompts;
use crate::providers::Provider;

/// Dish used when no dish has been discussed yet.
pub const PLACEHOLDER_DISH: &str = "an Indian dish";

/// Drink or side suggestions. Unlike the other context-dependent handlers it
/// never refuses: without a dish it falls back to [`PLACEHOLDER_DISH`].
pub struct PairingAdvisor;

#[async_trait]
impl Handler for PairingAdvisor {
    fn name(&self) -> &'static str {
        "pairing_advisor"
    }

    async fn handle(
        &self,
        provider: &dyn Provider,
        _utterance: &str,
        context: &SessionContext,
    ) -> Result<TurnResult, RecipeError> {
        let dish = context.last_dish.as_deref().unwrap_or(PLACEHOLDER_DISH);
        let reply = provider.generate(&prompts::pairing(dish)).await?;
        Ok(TurnResult::reply(reply))
    }
}

pub mod followup;
pub mod instructions;
pub mod pairing;
pub mod recipe_finder;

use async_trait::async_trait;

use crate::context::{SessionContext, TurnResult};
use crate::error::RecipeError;
use crate::providers::Provider;

pub use followup::FollowupResolver;
pub use instructions::InstructionFetcher;
pub use pairing::PairingAdvisor;
pub use recipe_finder::RecipeFinder;

/// Shown when a handler needs a dish and none has been discussed yet.
pub const NEED_DISH_MESSAGE: &str = "Please tell me the ingredients or a dish name first.";

/// Shown when a follow-up arrives before any dish has been discussed.
pub const CLARIFY_MESSAGE: &str = "Please clarify. Ask about recipes, instructions, or pairings.";

/// Task handler for one intent.
///
/// Handlers never mutate the context; they describe changes through the
/// returned [`TurnResult`]. A handler whose precondition fails answers with a
/// fixed message and must not touch the provider.
#[async_trait]
pub trait Handler: Send + Sync {
    fn name(&self) -> &'static str;

    async fn handle(
        &self,
        provider: &dyn Provider,
        utterance: &str,
        context: &SessionContext,
    ) -> Result<TurnResult, RecipeError>;
}

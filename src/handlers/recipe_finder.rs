use async_trait::async_trait;

use super::Handler;
use crate::context::{ContextUpdate, SessionContext, TurnResult};
use crate::error::RecipeError;
use crate::parse::{dish_from_reply, extract_ingredients};
use crate::prompts;
use crate::providers::Provider;

/// Prefixed to every recipe suggestion shown to the user.
pub const RESPONSE_MARKER: &str = "🍳";

/// Suggests dishes from the ingredients mentioned in the utterance.
///
/// Replaces both `last_dish` (first line of the reply, see
/// [`dish_from_reply`]) and `last_ingredients`.
pub struct RecipeFinder;

#[async_trait]
impl Handler for RecipeFinder {
    fn name(&self) -> &'static str {
        "recipe_finder"
    }

    async fn handle(
        &self,
        provider: &dyn Provider,
        utterance: &str,
        _context: &SessionContext,
    ) -> Result<TurnResult, RecipeError> {
        let ingredients = extract_ingredients(utterance);
        tracing::debug!(count = ingredients.len(), "extracted ingredients");

        let reply = provider
            .generate(&prompts::recipe_suggestions(&ingredients))
            .await?;
        let dish = dish_from_reply(&reply);

        Ok(TurnResult {
            response: format!("{RESPONSE_MARKER} {reply}"),
            update: ContextUpdate {
                dish: Some(dish),
                ingredients: Some(ingredients),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::scripted::ScriptedProvider;

    #[tokio::test]
    async fn extracts_ingredients_and_dish() {
        let provider = ScriptedProvider::new(["**Dish: Chicken Pulao**\nOne-pot rice with chicken."]);
        let result = RecipeFinder
            .handle(&provider, "What can I make with chicken and rice?", &SessionContext::default())
            .await
            .unwrap();

        assert_eq!(
            result.response,
            "🍳 **Dish: Chicken Pulao**\nOne-pot rice with chicken."
        );
        assert_eq!(result.update.dish, Some(Some("Chicken Pulao".to_owned())));
        assert_eq!(
            result.update.ingredients,
            Some(vec!["chicken".to_owned(), "rice".to_owned()])
        );
        assert!(provider.prompts()[0].contains("ingredients: chicken, rice,"));
    }

    #[tokio::test]
    async fn blank_first_line_clears_dish() {
        let provider = ScriptedProvider::new(["\nSome ideas follow."]);
        let result = RecipeFinder
            .handle(&provider, "eggs", &SessionContext::default())
            .await
            .unwrap();

        assert_eq!(result.update.dish, Some(None));
    }

    #[tokio::test]
    async fn provider_failure_propagates() {
        let provider = ScriptedProvider::new(Vec::<String>::new());
        let err = RecipeFinder
            .handle(&provider, "eggs", &SessionContext::default())
            .await
            .unwrap_err();
        assert!(matches!(err, RecipeError::Provider(_)));
    }
}

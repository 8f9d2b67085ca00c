/// Conversational memory carried from one turn to the next.
///
/// Replaced wholesale after every turn by [`SessionContext::merge`]; handlers
/// only ever see it by shared reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionContext {
    pub last_utterance: String,
    pub last_dish: Option<String>,
    pub last_ingredients: Vec<String>,
    pub last_response: Option<String>,
}

/// What a handler wants changed in the context. `None` leaves a field alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextUpdate {
    /// `Some(None)` clears the dish, `Some(Some(_))` replaces it.
    pub dish: Option<Option<String>>,
    pub ingredients: Option<Vec<String>>,
}

/// Output of one handler invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnResult {
    pub response: String,
    pub update: ContextUpdate,
}

impl TurnResult {
    /// A reply that leaves dish and ingredients untouched.
    pub fn reply(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            update: ContextUpdate::default(),
        }
    }
}

impl SessionContext {
    /// Fold a finished turn into a new context value.
    ///
    /// The utterance and response are always refreshed. Dish and ingredients
    /// change only when the handler supplied new values.
    pub fn merge(&self, utterance: &str, result: &TurnResult) -> Self {
        let update = &result.update;
        Self {
            last_utterance: utterance.to_owned(),
            last_dish: match &update.dish {
                Some(dish) => dish.clone(),
                None => self.last_dish.clone(),
            },
            last_ingredients: update
                .ingredients
                .clone()
                .unwrap_or_else(|| self.last_ingredients.clone()),
            last_response: Some(result.response.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn established() -> SessionContext {
        SessionContext {
            last_utterance: "what can I make with lamb?".to_owned(),
            last_dish: Some("Rogan Josh".to_owned()),
            last_ingredients: vec!["lamb".to_owned()],
            last_response: Some("🍳 Rogan Josh".to_owned()),
        }
    }

    #[test]
    fn fresh_context_is_empty() {
        let ctx = SessionContext::default();
        assert!(ctx.last_utterance.is_empty());
        assert!(ctx.last_dish.is_none());
        assert!(ctx.last_ingredients.is_empty());
        assert!(ctx.last_response.is_none());
    }

    #[test]
    fn plain_reply_keeps_dish_and_ingredients() {
        let before = established();
        let after = before.merge("how long?", &TurnResult::reply("About an hour."));

        assert_eq!(after.last_dish, before.last_dish);
        assert_eq!(after.last_ingredients, before.last_ingredients);
        assert_eq!(after.last_utterance, "how long?");
        assert_eq!(after.last_response.as_deref(), Some("About an hour."));
    }

    #[test]
    fn update_overwrites_dish_and_ingredients() {
        let result = TurnResult {
            response: "🍳 Omelette".to_owned(),
            update: ContextUpdate {
                dish: Some(Some("Omelette".to_owned())),
                ingredients: Some(vec!["eggs".to_owned()]),
            },
        };
        let after = established().merge("eggs?", &result);

        assert_eq!(after.last_dish.as_deref(), Some("Omelette"));
        assert_eq!(after.last_ingredients, vec!["eggs"]);
    }

    #[test]
    fn update_can_clear_dish() {
        let result = TurnResult {
            response: "🍳".to_owned(),
            update: ContextUpdate {
                dish: Some(None),
                ingredients: None,
            },
        };
        let after = established().merge("hmm", &result);

        assert!(after.last_dish.is_none());
        assert_eq!(after.last_ingredients, vec!["lamb"]);
    }

    #[test]
    fn merge_leaves_original_untouched() {
        let before = established();
        let snapshot = before.clone();
        let _ = before.merge("x", &TurnResult::reply("y"));
        assert_eq!(before, snapshot);
    }
}

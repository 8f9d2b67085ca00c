//! Prompt templates for the classifier and each task handler.

const CLASSIFIER_TEMPLATE: &str = "\
You are an AI assistant that classifies user queries into one of the following categories:

1. recipe_finder — if the user is asking what to cook based on ingredients.
2. instruction_fetcher — if the user is asking how to make a dish.
3. pairing_advisor — if the user is asking what to pair with a dish (e.g., wine, bread, dessert).
4. followup_resolver — if the user is asking a follow-up, substitution, clarification, or something vague.

Query: {query}

Respond with only one word: recipe_finder, instruction_fetcher, pairing_advisor, or followup_resolver.
";

pub fn classifier(utterance: &str) -> String {
    CLASSIFIER_TEMPLATE.replace("{query}", utterance)
}

pub fn recipe_suggestions(ingredients: &[String]) -> String {
    format!(
        "You are a smart cooking assistant. Based on the ingredients: {}, suggest possible \
         dishes the user can cook. Mention the dish name and a short description.",
        ingredients.join(", ")
    )
}

pub fn instructions(dish: &str) -> String {
    format!("How do I cook {dish}? Provide step-by-step instructions in simple language.")
}

pub fn pairing(dish: &str) -> String {
    format!("Suggest a drink or side dish to pair with {dish}. Explain briefly why it pairs well.")
}

pub fn followup(dish: &str, utterance: &str) -> String {
    format!(
        "You are a helpful cooking assistant. The user previously got the dish: \"{dish}\". \
         Now they asked: \"{utterance}\". Based on this, give a helpful and conversational \
         response related to the previous context."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifier_lists_every_label_and_embeds_query() {
        let prompt = classifier("what goes with naan?");
        for label in [
            "recipe_finder",
            "instruction_fetcher",
            "pairing_advisor",
            "followup_resolver",
        ] {
            assert!(prompt.contains(label), "missing {label}");
        }
        assert!(prompt.contains("Query: what goes with naan?"));
        assert!(prompt.contains("Respond with only one word"));
    }

    #[test]
    fn recipe_prompt_joins_ingredients() {
        let prompt = recipe_suggestions(&["chicken".to_owned(), "rice".to_owned()]);
        assert!(prompt.contains("ingredients: chicken, rice,"));
    }

    #[test]
    fn followup_prompt_quotes_dish_and_question() {
        let prompt = followup("Dal Makhani", "can I use cream instead?");
        assert!(prompt.contains("\"Dal Makhani\""));
        assert!(prompt.contains("\"can I use cream instead?\""));
    }
}

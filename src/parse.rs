//! Best-effort text heuristics around model input and output.
//!
//! Neither function understands language. `extract_ingredients` splits
//! multi-word ingredients ("olive oil" becomes two entries) and keeps any word
//! not on the stop list. `dish_from_reply` assumes the model puts the dish name
//! on the first line. Both are kept deliberately simple and isolated here so
//! that format drift can be patched in one place.

use std::sync::LazyLock;

use regex::Regex;

/// Words dropped when approximating an ingredient list from a question.
pub const STOP_WORDS: &[&str] = &[
    "i", "have", "and", "with", "some", "a", "an", "the", "what", "can", "make",
];

static TOKEN_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s,]+").expect("separator pattern is valid"));

/// Approximate the ingredients named in `utterance`.
///
/// Lower-cases, splits on whitespace and commas, trims punctuation at either
/// end of each token, then drops empty tokens and stop words. Order of first
/// appearance is kept; duplicates are not removed.
pub fn extract_ingredients(utterance: &str) -> Vec<String> {
    let lowered = utterance.to_lowercase();
    TOKEN_SEPARATOR
        .split(&lowered)
        .map(|token| token.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|token| !token.is_empty() && !STOP_WORDS.contains(token))
        .map(str::to_owned)
        .collect()
}

/// Pull a dish name out of the first line of a recipe-suggestion reply.
///
/// Strips `**` emphasis and a literal `Dish:` label. Returns `None` when
/// nothing is left.
pub fn dish_from_reply(reply: &str) -> Option<String> {
    let first = reply.lines().next().unwrap_or_default();
    let cleaned = first.trim().replace("**", "").replace("Dish:", "");
    let cleaned = cleaned.trim();
    (!cleaned.is_empty()).then(|| cleaned.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut v: Vec<String>) -> Vec<String> {
        v.sort();
        v
    }

    #[test]
    fn stop_words_and_punctuation_removed() {
        assert_eq!(
            extract_ingredients("What can I make with chicken and rice?"),
            vec!["chicken", "rice"]
        );
    }

    #[test]
    fn case_and_separator_insensitive() {
        assert_eq!(
            sorted(extract_ingredients("I have Eggs, Milk")),
            sorted(extract_ingredients("eggs and milk"))
        );
    }

    #[test]
    fn commas_without_spaces_split() {
        assert_eq!(
            extract_ingredients("tomato,basil,,garlic"),
            vec!["tomato", "basil", "garlic"]
        );
    }

    #[test]
    fn multi_word_ingredients_are_split() {
        assert_eq!(
            extract_ingredients("I have olive oil"),
            vec!["olive", "oil"]
        );
    }

    #[test]
    fn inner_punctuation_kept() {
        assert_eq!(
            extract_ingredients("some half-and-half, chef's herbs!"),
            vec!["half-and-half", "chef's", "herbs"]
        );
    }

    #[test]
    fn only_stop_words_yields_empty() {
        assert!(extract_ingredients("What can I make?").is_empty());
        assert!(extract_ingredients("   ").is_empty());
    }

    #[test]
    fn dish_label_and_emphasis_stripped() {
        assert_eq!(
            dish_from_reply("**Dish: Chicken Biryani**\nA fragrant rice dish."),
            Some("Chicken Biryani".to_owned())
        );
    }

    #[test]
    fn plain_first_line_used() {
        assert_eq!(
            dish_from_reply("Egg Fried Rice\n\nQuick and easy."),
            Some("Egg Fried Rice".to_owned())
        );
    }

    #[test]
    fn empty_first_line_yields_none() {
        assert_eq!(dish_from_reply(""), None);
        assert_eq!(dish_from_reply("**Dish:**\nsomething"), None);
        assert_eq!(dish_from_reply("\nSecond line"), None);
    }
}

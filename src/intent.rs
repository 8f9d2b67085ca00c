use crate::error::RecipeError;
use crate::prompts;
use crate::providers::Provider;

/// Classified purpose of a user utterance.
///
/// Closed set of four known labels plus `Unrecognized`, which keeps whatever
/// the model actually answered so it can be logged. Routing treats
/// `Unrecognized` exactly like `FollowupResolver`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Intent {
    RecipeFinder,
    InstructionFetcher,
    PairingAdvisor,
    FollowupResolver,
    Unrecognized(String),
}

impl Intent {
    /// Interpret a raw classifier reply. Trims and lower-cases, nothing more.
    pub fn from_label(raw: &str) -> Self {
        let label = raw.trim().to_lowercase();
        match label.as_str() {
            "recipe_finder" => Self::RecipeFinder,
            "instruction_fetcher" => Self::InstructionFetcher,
            "pairing_advisor" => Self::PairingAdvisor,
            "followup_resolver" => Self::FollowupResolver,
            _ => Self::Unrecognized(label),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::RecipeFinder => "recipe_finder",
            Self::InstructionFetcher => "instruction_fetcher",
            Self::PairingAdvisor => "pairing_advisor",
            Self::FollowupResolver => "followup_resolver",
            Self::Unrecognized(raw) => raw.as_str(),
        }
    }
}

/// Ask the model which of the four categories `utterance` belongs to.
pub async fn classify(provider: &dyn Provider, utterance: &str) -> Result<Intent, RecipeError> {
    let reply = provider.generate(&prompts::classifier(utterance)).await?;
    let intent = Intent::from_label(&reply);
    if let Intent::Unrecognized(raw) = &intent {
        tracing::warn!(label = %raw, "classifier returned an unknown label");
    }
    Ok(intent)
}

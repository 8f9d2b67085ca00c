use crate::handlers::{FollowupResolver, Handler, InstructionFetcher, PairingAdvisor, RecipeFinder};
use crate::intent::Intent;

/// Map a classified intent to its handler.
///
/// Pure dispatch. Any label the classifier made up lands on the follow-up
/// resolver.
pub fn route(intent: &Intent) -> &'static dyn Handler {
    match intent {
        Intent::RecipeFinder => &RecipeFinder,
        Intent::InstructionFetcher => &InstructionFetcher,
        Intent::PairingAdvisor => &PairingAdvisor,
        Intent::FollowupResolver | Intent::Unrecognized(_) => &FollowupResolver,
    }
}

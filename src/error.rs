// ⚠️ Validation errors
// The only domain error: raised before any mutation, shown to the user as a notice

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a title and description for the update.")]
    MissingProgressFields,

    #[error("Please enter an item name and a valid cost.")]
    InvalidBudgetItem,

    #[error("Please enter an item name and a valid estimated cost.")]
    InvalidWishItem,

    #[error("Costs cannot be negative.")]
    NegativeCost,

    #[error("Costs above $1,000,000,000,000 are not accepted.")]
    CostTooLarge,

    #[error("Please choose a category from the list (got \"{0}\").")]
    UnknownCategory(String),

    #[error("Please paste an image URL first.")]
    EmptyHeroUrl,

    #[error("Please enter some text for the build story.")]
    EmptyBuildStory,
}

//! Category fixtures for creating in-memory test data.

use entity::category;

/// Default test category slug.
pub const DEFAULT_SLUG: &str = "euro game";

/// Default test category description.
pub const DEFAULT_DESCRIPTION: &str = "Abstact games that involve little luck";

/// Creates a category entity model with default values.
pub fn entity() -> category::Model {
    category::Model {
        slug: DEFAULT_SLUG.to_string(),
        description: DEFAULT_DESCRIPTION.to_string(),
    }
}

/// Categories of the seed dataset.
pub fn dataset() -> Vec<category::Model> {
    [
        ("euro game", "Abstact games that involve little luck"),
        (
            "social deduction",
            "Players attempt to uncover each other's hidden role",
        ),
        ("dexterity", "Games involving physical skill"),
        ("children's games", "Games suitable for children"),
    ]
    .into_iter()
    .map(|(slug, description)| category::Model {
        slug: slug.to_string(),
        description: description.to_string(),
    })
    .collect()
}

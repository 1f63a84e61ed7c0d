//! User fixtures for creating in-memory test data.

use entity::user;

/// Default test username.
pub const DEFAULT_USERNAME: &str = "mallionaire";

/// Creates a user entity model with default values.
pub fn entity() -> user::Model {
    user::Model {
        username: DEFAULT_USERNAME.to_string(),
        name: "haz".to_string(),
        avatar_url: "https://www.healthytherapies.com/wp-content/uploads/2016/06/Lime3.jpg"
            .to_string(),
    }
}

/// Users of the seed dataset.
pub fn dataset() -> Vec<user::Model> {
    [
        (
            "mallionaire",
            "haz",
            "https://www.healthytherapies.com/wp-content/uploads/2016/06/Lime3.jpg",
        ),
        (
            "philippaclaire9",
            "philippa",
            "https://avatars2.githubusercontent.com/u/24604688?s=460&v=4",
        ),
        (
            "bainesface",
            "sarah",
            "https://avatars2.githubusercontent.com/u/24394918?s=400&v=4",
        ),
        (
            "dav3rid",
            "dave",
            "https://www.golenbock.com/wp-content/uploads/2015/01/placeholder-user.png",
        ),
    ]
    .into_iter()
    .map(|(username, name, avatar_url)| user::Model {
        username: username.to_string(),
        name: name.to_string(),
        avatar_url: avatar_url.to_string(),
    })
    .collect()
}

//! Comment fixtures for creating in-memory test data.

use entity::comment;

use super::timestamp;

/// Creates a comment entity model with default values.
pub fn entity() -> comment::Model {
    comment::Model {
        comment_id: 1,
        author: "bainesface".to_string(),
        review_id: 2,
        body: "I loved this game too!".to_string(),
        votes: 16,
        created_at: timestamp(1511354613),
    }
}

/// Comments of the seed dataset, in insertion order (`comment_id` 1 to 6).
///
/// Newest first, review 2 has comments 5, 1, 4 and review 3 has comments 6, 3, 2.
pub fn dataset() -> Vec<comment::Model> {
    let rows: [(&str, i32, &str, i32, i64); 6] = [
        ("bainesface", 2, "I loved this game too!", 16, 1511354613),
        ("mallionaire", 3, "My dog loved this game too!", 13, 1610964545),
        (
            "philippaclaire9",
            3,
            "I didn't know dogs could play games",
            10,
            1610964588,
        ),
        ("philippaclaire9", 2, "EPIC board game!", 16, 1511354163),
        (
            "mallionaire",
            2,
            "Now this is a story all about how, board games turned my life upside down",
            13,
            1610965445,
        ),
        (
            "philippaclaire9",
            3,
            "Not sure about dogs, but my cat likes to get involved with board games",
            10,
            1616874588,
        ),
    ];

    rows.into_iter()
        .enumerate()
        .map(
            |(index, (author, review_id, body, votes, created_at))| comment::Model {
                comment_id: index as i32 + 1,
                author: author.to_string(),
                review_id,
                body: body.to_string(),
                votes,
                created_at: timestamp(created_at),
            },
        )
        .collect()
}

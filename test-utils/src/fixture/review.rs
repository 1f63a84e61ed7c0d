//! Review fixtures for creating in-memory test data.

use entity::review;

use super::timestamp;

/// Image used by every review of the seed dataset.
pub const DEFAULT_IMG_URL: &str =
    "https://images.pexels.com/photos/974314/pexels-photo-974314.jpeg?w=700&h=700";

/// Creates a review entity model with default values.
///
/// # Default Values
/// - review_id: `1`
/// - title: `"Agricola"`
/// - category: `"euro game"`
/// - owner: `"mallionaire"`
/// - votes: `1`
pub fn entity() -> review::Model {
    review::Model {
        review_id: 1,
        title: "Agricola".to_string(),
        category: "euro game".to_string(),
        designer: "Uwe Rosenberg".to_string(),
        owner: "mallionaire".to_string(),
        review_body: "Farmyard fun!".to_string(),
        review_img_url: DEFAULT_IMG_URL.to_string(),
        created_at: timestamp(1610964020),
        votes: 1,
    }
}

/// Reviews of the seed dataset, in insertion order (`review_id` 1 to 13).
///
/// Every `created_at` is distinct so ordering assertions are deterministic. Newest first
/// the order is 7, 4, 12, 5, 11, 10, 9, 8, 3, 2, 1, 6, 13.
pub fn dataset() -> Vec<review::Model> {
    let rows: [(&str, &str, &str, &str, &str, i64, i32); 13] = [
        (
            "Agricola",
            "Uwe Rosenberg",
            "mallionaire",
            "Farmyard fun!",
            "euro game",
            1610964020,
            1,
        ),
        (
            "Jenga",
            "Leslie Scott",
            "philippaclaire9",
            "Fiddly fun for all the family",
            "dexterity",
            1610964101,
            5,
        ),
        (
            "Ultimate Werewolf",
            "Akihisa Okui",
            "bainesface",
            "We couldn't find the werewolf!",
            "social deduction",
            1610964102,
            5,
        ),
        (
            "Dolor reprehenderit",
            "Gamey McGameface",
            "mallionaire",
            "Consequat velit occaecat voluptate do. Dolor pariatur fugiat sint et proident ex do consequat est.",
            "social deduction",
            1611315350,
            7,
        ),
        (
            "Proident tempor et.",
            "Seymour Buttz",
            "mallionaire",
            "Labore occaecat sunt qui commodo anim anim aliqua adipisicing aliquip fugiat.",
            "social deduction",
            1611311824,
            5,
        ),
        (
            "Occaecat consequat officia in quis commodo.",
            "Ollie Tabooger",
            "mallionaire",
            "Fugiat fugiat enim officia laborum quis. Aliquip laboris non nulla nostrud magna exercitation.",
            "social deduction",
            1600006768,
            8,
        ),
        (
            "Mollit elit qui incididunt veniam occaecat cupidatat",
            "Avery Wunzboogerz",
            "mallionaire",
            "Consectetur incididunt aliquip sunt officia. Magna ex nulla consectetur laboris incididunt ea non qui.",
            "social deduction",
            1611573414,
            9,
        ),
        (
            "One Night Ultimate Werewolf",
            "Akihisa Okui",
            "mallionaire",
            "We couldn't find the werewolf!",
            "social deduction",
            1610964103,
            5,
        ),
        (
            "A truly Quacking Game; Quacks of Quedlinburg",
            "Wolfgang Warsch",
            "mallionaire",
            "Ever wish you could play a game that would leave you quacking with joy?",
            "social deduction",
            1610964104,
            10,
        ),
        (
            "Build you own tour de Yorkshire",
            "Asger Harding Granerud",
            "mallionaire",
            "Cold rain pours on the faces of your team of cyclists, you pulse is racing.",
            "social deduction",
            1610964105,
            10,
        ),
        (
            "That's just what an evil person would say!",
            "Fiona Lohoar",
            "mallionaire",
            "If you've ever wanted to accuse your siblings, friends or family of being a monster.",
            "social deduction",
            1610964106,
            8,
        ),
        (
            "Scythe; you're gonna need a bigger table!",
            "Jamey Stegmaier",
            "mallionaire",
            "Spend 30 minutes just setting up all of the boards before you even start.",
            "social deduction",
            1611311825,
            100,
        ),
        (
            "Settlers of Catan: Don't Settle For Less",
            "Klaus Teuber",
            "mallionaire",
            "You have stumbled across an uncharted island rich in natural resources.",
            "social deduction",
            785318,
            16,
        ),
    ];

    rows.into_iter()
        .enumerate()
        .map(
            |(index, (title, designer, owner, review_body, category, created_at, votes))| {
                review::Model {
                    review_id: index as i32 + 1,
                    title: title.to_string(),
                    category: category.to_string(),
                    designer: designer.to_string(),
                    owner: owner.to_string(),
                    review_body: review_body.to_string(),
                    review_img_url: DEFAULT_IMG_URL.to_string(),
                    created_at: timestamp(created_at),
                    votes,
                }
            },
        )
        .collect()
}

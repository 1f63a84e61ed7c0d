//! Test fixtures providing reusable test data without database insertion.
//!
//! Each module exposes `entity()`, a single in-memory model with default values, and
//! `dataset()`, the rows of the seed dataset for that table. Unlike factories,
//! fixtures do NOT insert data into the database; `crate::seed` does that for the dataset.
//!
//! # Seed dataset shape
//!
//! - 4 categories, one of which (`children's games`) is used by no review
//! - 4 users, one of which (`dav3rid`) owns nothing
//! - 13 reviews; only review 2 is `dexterity`
//! - 6 comments, three on review 2 and three on review 3
//!
//! Review and comment IDs are assigned in dataset order starting at 1.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let review = fixture::review::entity();
//! let reviews = fixture::review::dataset();
//! assert_eq!(reviews.len(), 13);
//! ```

pub mod category;
pub mod comment;
pub mod review;
pub mod user;

use chrono::{DateTime, Utc};

/// Converts a unix timestamp in seconds into a UTC datetime.
///
/// Out-of-range values fall back to the unix epoch.
pub(crate) fn timestamp(seconds: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(seconds, 0).unwrap_or_default()
}

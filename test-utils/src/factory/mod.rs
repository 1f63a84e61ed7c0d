//! Factory methods for creating test data.
//!
//! This module provides factory methods for inserting test entities with sensible defaults,
//! reducing boilerplate in tests. Factories that need a parent row (a review needs a
//! category and an owner, a comment needs a review and an author) take the parent keys
//! explicitly; `helpers` has shortcuts that create the whole chain.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let category = factory::create_category(&db).await?;
//!     let user = factory::create_user(&db).await?;
//!     let review = factory::create_review(&db, &category.slug, &user.username).await?;
//!
//!     // Or everything at once
//!     let (category, user, review) = factory::helpers::create_review_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let review = factory::review::ReviewFactory::new(&db, "dexterity", "bainesface")
//!     .title("Jenga")
//!     .votes(-3)
//!     .build()
//!     .await?;
//! ```

pub mod category;
pub mod comment;
pub mod helpers;
pub mod review;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use category::create_category;
pub use comment::create_comment;
pub use review::create_review;
pub use user::create_user;

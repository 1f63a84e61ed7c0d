//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a review together with the category and owner it references.
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((category, owner, review))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_review_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::category::Model,
        entity::user::Model,
        entity::review::Model,
    ),
    DbErr,
> {
    let category = crate::factory::category::create_category(db).await?;
    let owner = crate::factory::user::create_user(db).await?;
    let review = crate::factory::review::create_review(db, &category.slug, &owner.username).await?;

    Ok((category, owner, review))
}

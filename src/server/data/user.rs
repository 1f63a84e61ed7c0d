//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for reading user records. Users are
//! never created or modified through the API; they exist only as review owners and
//! comment authors.

use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryOrder};

use crate::server::model::user::User;

/// Repository providing database operations for users.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every user ordered by username.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - All users, empty if none exist
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Username)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Checks whether a user with the given username exists.
    ///
    /// # Arguments
    /// - `username` - Primary key of the user
    ///
    /// # Returns
    /// - `Ok(true)` - User exists
    /// - `Ok(false)` - No user with that username
    /// - `Err(DbErr)` - Database error during query
    pub async fn exists(&self, username: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find_by_id(username.to_string())
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}

//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! table of the reviews schema. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! All queries are parameterized through SeaORM; no SQL is assembled from request input.

pub mod category;
pub mod comment;
pub mod review;
pub mod user;

#[cfg(test)]
mod test;

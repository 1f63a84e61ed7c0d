//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Existence Checks**: Confirming referenced reviews, users and categories exist
//!   before querying or mutating, and classifying failures as `ReviewError`
//! - **Orchestration**: Coordinating repository calls for a single request
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod category;
pub mod comment;
pub mod review;
pub mod user;

#[cfg(test)]
mod test;

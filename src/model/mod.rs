//! Data transfer objects exchanged over the HTTP API.
//!
//! These types define the JSON contract of every endpoint. Server-side domain models
//! convert into them at the controller boundary via `into_dto()`.

pub mod api;
pub mod category;
pub mod comment;
pub mod review;
pub mod user;

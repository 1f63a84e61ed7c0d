//! HTTP request handlers.
//!
//! Each handler parses path, query and body input into server-side parameter types,
//! calls the matching service, and converts the resulting domain models into DTOs.
//! Classified failures flow back as `AppError` and render themselves as responses.

pub mod api;
pub mod category;
pub mod comment;
pub mod review;
pub mod user;

#[cfg(test)]
mod test;

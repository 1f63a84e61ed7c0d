//! Board Game Reviews Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the reviews
//! API. This crate offers a builder pattern for creating test contexts with in-memory SQLite
//! databases and customizable table schemas, plus factories, fixtures and the seed dataset.
//!
//! # Overview
//!
//! The test utilities consist of these components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Insert single rows with sensible defaults
//! - **fixture**: In-memory entity models, including the seed dataset
//! - **seed**: Inserts the seed dataset into a database
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_review_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_review_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
pub mod seed;

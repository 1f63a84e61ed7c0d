//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation for the reviews API,
//! including HTTP endpoints, business logic, and data access. The backend uses Axum as
//! the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, input parsing, and DTO conversion
//! - **Service Layer** (`service/`) - Existence checks and orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database queries and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database pool)
//! - **Startup** (`startup`) - Tracing, database connection, migrations, and seeding
//! - **Router** (`router`) - Axum route configuration and API documentation
//! - **Utilities** (`util/`) - Parsing of raw path and body input
//!
//! # Request Flow
//!
//! A typical request flows through these layers:
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** parses path, query and body into params, calls service
//! 3. **Service** checks referenced rows exist, calls repositories
//! 4. **Data** queries database, converts entities to domain models
//! 5. **Service** returns domain model or classified error to controller
//! 6. **Controller** converts domain model to DTO, returns HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;

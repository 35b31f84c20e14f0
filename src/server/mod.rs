//! Reservation backend: HTTP API, authorization gate, booking workflow and persistence.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers and DTO conversion
//! - **Service Layer** (`service/`) - Booking rules, authentication and catalog browsing
//! - **Data Layer** (`data/`) - Store traits and their SeaORM implementations
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Error hierarchy and HTTP response mapping
//! - **Middleware** (`middleware/`) - Token authentication and role checks
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared configuration, token service and stores
//! - **Startup** (`startup`) - Tracing, database connection and migrations
//! - **Router** (`router`) - Route table and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** matches the route
//! 2. **Middleware** authenticates the bearer token and checks the role for admin routes
//! 3. **Controller** converts DTOs to params and builds services around a request deadline
//! 4. **Service** applies business rules and calls stores under that deadline
//! 5. **Controller** converts domain models to DTOs and responds

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_support;

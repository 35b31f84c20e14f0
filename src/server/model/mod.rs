//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and into DTOs
//! at the controller boundary. Parameter types carry validated input from controllers into
//! services.

pub mod reservation;
pub mod restaurant;
pub mod user;

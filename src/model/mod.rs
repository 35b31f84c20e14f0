//! Wire DTOs shared by the HTTP layer and API documentation.
//!
//! Field names here are the external JSON contract. Server-side domain models live in
//! `server::model` and convert into these at the controller boundary.

pub mod api;
pub mod reservation;
pub mod restaurant;
pub mod user;

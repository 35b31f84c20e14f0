//! Service layer for business logic and orchestration.
//!
//! Services sit between controllers and stores. They are built per request around a
//! `Deadline`, so every store call they make is bounded by the request's time budget, and
//! they work with domain models rather than DTOs or entity models.

pub mod auth;
pub mod reservation;
pub mod restaurant;
pub mod token;

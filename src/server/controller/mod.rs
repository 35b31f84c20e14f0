//! HTTP request handlers.
//!
//! Controllers convert DTOs to params, call services built around the request's deadline and
//! convert domain models back to DTOs. Authentication and role checks happen in middleware
//! before a handler runs; ownership checks happen in the reservation service.

pub mod auth;
pub mod food;
pub mod health;
pub mod reservation;
pub mod restaurant;

#[cfg(test)]
mod test;

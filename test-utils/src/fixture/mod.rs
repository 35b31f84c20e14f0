//! Test fixtures providing entity models without database insertion.
//!
//! Unlike factories, fixtures never touch the database. Use them to unit test entity to
//! domain conversions and to seed in-memory store doubles.
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let restaurant = fixture::restaurant::entity_builder()
//!     .hours("20:00", "02:00")
//!     .build();
//! ```

pub mod restaurant;
pub mod user;

pub use restaurant::{entity as restaurant_entity, entity_builder as restaurant_entity_builder};
pub use user::{entity as user_entity, entity_builder as user_entity_builder};

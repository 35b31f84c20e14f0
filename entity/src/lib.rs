//! SeaORM entity definitions for the TableBook schema.

pub mod prelude;

pub mod food;
pub mod reservation;
pub mod restaurant;
pub mod user;

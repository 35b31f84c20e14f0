//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults so tests only spell out the fields
//! they care about. Each entity has a `Factory` struct for customization and a `create_*`
//! convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::create_user(&db).await?;
//! let restaurant = factory::restaurant::RestaurantFactory::new(&db)
//!     .category("thai")
//!     .hours("09:00", "22:00")
//!     .build()
//!     .await?;
//! factory::reservation::create_reservations(&db, user.id, restaurant.id, 3).await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - User accounts
//! - `restaurant` - Restaurants with opening hours
//! - `food` - Menu items owned by a restaurant
//! - `reservation` - Reservations referencing a user and restaurant
//! - `helpers` - Unique id counter and multi-entity shortcuts

pub mod food;
pub mod helpers;
pub mod reservation;
pub mod restaurant;
pub mod user;

pub use food::create_food;
pub use reservation::{create_reservation, create_reservations};
pub use restaurant::create_restaurant;
pub use user::create_user;

//! Persistence boundary.
//!
//! The booking engine, authorization layer and catalog browsing depend only on the store
//! traits defined here. `CatalogRepository`, `ReservationRepository` and `UserRepository`
//! implement them over SeaORM; tests substitute the in-memory doubles from `memory`.
//!
//! Stores carry no deadlines of their own. Callers bound every call with
//! `util::deadline::Deadline`.

pub mod reservation;
pub mod restaurant;
pub mod user;

#[cfg(test)]
pub mod memory;
#[cfg(test)]
mod test;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::server::{
    error::store::StoreError,
    model::{
        reservation::Reservation,
        restaurant::{Food, Restaurant},
        user::{NewUserParam, User},
    },
};

/// Read access to restaurants and their menus.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Returns the restaurant with its foods in menu order, or `None` if unknown.
    async fn get_restaurant_by_id(&self, id: Uuid) -> Result<Option<Restaurant>, StoreError>;

    /// Returns every restaurant ordered by name.
    async fn list_restaurants(&self) -> Result<Vec<Restaurant>, StoreError>;

    /// Returns restaurants whose category matches exactly, ordered by name.
    async fn list_restaurants_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<Restaurant>, StoreError>;

    /// Returns one menu item, or `None` if it does not belong to the restaurant.
    async fn get_food(&self, restaurant_id: Uuid, food_id: Uuid)
        -> Result<Option<Food>, StoreError>;
}

/// Reservation persistence.
#[async_trait]
pub trait ReservationStore: Send + Sync {
    /// Number of reservations currently held by a user.
    async fn count_for_user(&self, user_id: Uuid) -> Result<u64, StoreError>;

    /// Persists the reservation only if the user holds fewer than `cap` reservations.
    ///
    /// The count check and the insert are atomic with respect to other inserts for the same
    /// user.
    ///
    /// # Returns
    /// - `Ok(Some(Reservation))` - Inserted
    /// - `Ok(None)` - The user is already at the cap; nothing was written
    async fn insert_if_under_cap(
        &self,
        reservation: Reservation,
        cap: u64,
    ) -> Result<Option<Reservation>, StoreError>;

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Reservation>, StoreError>;

    /// Every reservation, ordered by date.
    async fn list_all(&self) -> Result<Vec<Reservation>, StoreError>;

    /// Reservations held by one user, ordered by date.
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Reservation>, StoreError>;

    /// Moves a reservation to a new date.
    ///
    /// # Returns
    /// - `Ok(Some(Reservation))` - The updated reservation
    /// - `Ok(None)` - No reservation with that id
    async fn update_date(
        &self,
        id: Uuid,
        date: DateTime<Utc>,
    ) -> Result<Option<Reservation>, StoreError>;

    /// Deletes a reservation, returning whether a row was removed.
    async fn delete(&self, id: Uuid) -> Result<bool, StoreError>;
}

/// Account lookup and registration.
#[async_trait]
pub trait IdentityStore: Send + Sync {
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Registers a new account.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Created
    /// - `Ok(None)` - The email is already registered
    async fn create_user(&self, param: NewUserParam) -> Result<Option<User>, StoreError>;
}

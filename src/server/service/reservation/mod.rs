//! Reservation booking workflow.
//!
//! `create` is the only path that inserts reservations. It checks, in order, that the
//! restaurant exists, that the user is under the reservation cap and that the requested time
//! falls within opening hours, then commits through the store's conditional insert so that
//! concurrent requests from one user can never push them past the cap.

pub mod rules;

#[cfg(test)]
mod test;

use chrono::Utc;
use uuid::Uuid;

use crate::server::{
    data::{CatalogStore, ReservationStore},
    error::{auth::AuthError, reservation::ReservationError, AppError},
    model::{
        reservation::{CreateReservationParam, Reservation, UpdateReservationParam},
        user::User,
    },
    service::reservation::rules::{
        check_operating_hours, check_reservation_cap, requested_time_of_day, RESERVATION_CAP,
    },
    util::{deadline::Deadline, parse::parse_id},
};

pub struct ReservationService<'a> {
    catalog: &'a dyn CatalogStore,
    reservations: &'a dyn ReservationStore,
    deadline: Deadline,
}

impl<'a> ReservationService<'a> {
    /// Creates a new ReservationService instance.
    ///
    /// # Arguments
    /// - `catalog` - Store used to look up the target restaurant
    /// - `reservations` - Store holding reservations
    /// - `deadline` - Time budget of the current request
    ///
    /// # Returns
    /// - `ReservationService` - New service instance
    pub fn new(
        catalog: &'a dyn CatalogStore,
        reservations: &'a dyn ReservationStore,
        deadline: Deadline,
    ) -> Self {
        Self {
            catalog,
            reservations,
            deadline,
        }
    }

    /// Books a reservation for the acting user.
    ///
    /// # Arguments
    /// - `user` - The authenticated user the reservation is booked for
    /// - `restaurant_id` - Raw restaurant id from the request path
    /// - `param` - Requested date with the caller's offset
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The persisted reservation
    /// - `Err(AppError::NotFound)` - Restaurant id malformed or unknown; nothing is written
    /// - `Err(ReservationError::LimitExceeded)` - User already holds the maximum
    /// - `Err(ReservationError::OutOfHours)` - Requested time outside opening hours
    /// - `Err(StoreError::Timeout)` - A store call exceeded the deadline
    pub async fn create(
        &self,
        user: &User,
        restaurant_id: &str,
        param: CreateReservationParam,
    ) -> Result<Reservation, AppError> {
        let restaurant_id = parse_id(restaurant_id, "Restaurant")?;

        let restaurant = self
            .deadline
            .run(
                "get_restaurant_by_id",
                self.catalog.get_restaurant_by_id(restaurant_id),
            )
            .await?
            .ok_or_else(|| AppError::NotFound("Restaurant not found".to_string()))?;

        let held = self
            .deadline
            .run("count_for_user", self.reservations.count_for_user(user.id))
            .await?;
        if let Err(err) = check_reservation_cap(held, RESERVATION_CAP) {
            tracing::info!(user_id = %user.id, held, "Reservation refused: cap reached");
            return Err(err.into());
        }

        let requested = requested_time_of_day(&param.date);
        if let Err(err) =
            check_operating_hours(requested, restaurant.open_time, restaurant.close_time)
        {
            tracing::info!(
                user_id = %user.id,
                restaurant_id = %restaurant.id,
                requested = %requested.format("%H:%M"),
                "Reservation refused: outside operating hours"
            );
            return Err(err.into());
        }

        let candidate = Reservation {
            id: Uuid::new_v4(),
            user_id: user.id,
            restaurant_id: restaurant.id,
            date: param.date.with_timezone(&Utc),
            updated_at: Utc::now(),
        };

        let Some(reservation) = self
            .deadline
            .run(
                "insert_if_under_cap",
                self.reservations
                    .insert_if_under_cap(candidate, RESERVATION_CAP),
            )
            .await?
        else {
            tracing::info!(user_id = %user.id, "Reservation refused: cap reached concurrently");
            return Err(ReservationError::LimitExceeded {
                cap: RESERVATION_CAP,
            }
            .into());
        };

        tracing::info!(
            reservation_id = %reservation.id,
            user_id = %reservation.user_id,
            restaurant_id = %reservation.restaurant_id,
            "Reservation created"
        );

        Ok(reservation)
    }

    /// # Returns
    /// - `Ok(Reservation)` - The reservation
    /// - `Err(AppError::NotFound)` - Unknown or malformed id
    pub async fn get_by_id(&self, id: &str) -> Result<Reservation, AppError> {
        let id = parse_id(id, "Reservation")?;

        self.deadline
            .run("get_reservation_by_id", self.reservations.get_by_id(id))
            .await?
            .ok_or_else(|| AppError::NotFound("Reservation not found".to_string()))
    }

    pub async fn get_all(&self) -> Result<Vec<Reservation>, AppError> {
        Ok(self
            .deadline
            .run("list_reservations", self.reservations.list_all())
            .await?)
    }

    pub async fn get_for_user(&self, user: &User) -> Result<Vec<Reservation>, AppError> {
        Ok(self
            .deadline
            .run(
                "list_reservations_for_user",
                self.reservations.list_for_user(user.id),
            )
            .await?)
    }

    /// Moves a reservation to a new date.
    ///
    /// Opening hours are not re-checked.
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The updated reservation
    /// - `Err(AppError::NotFound)` - Unknown or malformed id
    /// - `Err(AuthError::NotOwner)` - Acting user is neither the owner nor an admin
    pub async fn update(
        &self,
        user: &User,
        id: &str,
        param: UpdateReservationParam,
    ) -> Result<Reservation, AppError> {
        let existing = self.get_by_id(id).await?;
        ensure_owner_or_admin(user, &existing)?;

        self.deadline
            .run(
                "update_reservation_date",
                self.reservations.update_date(existing.id, param.date),
            )
            .await?
            .ok_or_else(|| AppError::NotFound("Reservation not found".to_string()))
    }

    /// # Returns
    /// - `Ok(())` - Deleted
    /// - `Err(AppError::NotFound)` - Unknown or malformed id
    /// - `Err(AuthError::NotOwner)` - Acting user is neither the owner nor an admin
    pub async fn delete(&self, user: &User, id: &str) -> Result<(), AppError> {
        let existing = self.get_by_id(id).await?;
        ensure_owner_or_admin(user, &existing)?;

        let deleted = self
            .deadline
            .run("delete_reservation", self.reservations.delete(existing.id))
            .await?;
        if !deleted {
            return Err(AppError::NotFound("Reservation not found".to_string()));
        }

        tracing::info!(reservation_id = %existing.id, user_id = %user.id, "Reservation deleted");

        Ok(())
    }
}

fn ensure_owner_or_admin(user: &User, reservation: &Reservation) -> Result<(), AuthError> {
    if reservation.user_id == user.id || user.is_admin() {
        return Ok(());
    }
    Err(AuthError::NotOwner {
        user_id: user.id,
        reservation_id: reservation.id,
    })
}

//! Reservation factory for creating test reservation entities.
//!
//! Inserts rows directly, bypassing the booking rules, so tests can arrange a user that
//! already sits at or above the reservation cap.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test reservations.
pub struct ReservationFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: Uuid,
    restaurant_id: Uuid,
    date: DateTime<Utc>,
}

impl<'a> ReservationFactory<'a> {
    /// Creates a new ReservationFactory; the date defaults to one day from now.
    pub fn new(db: &'a DatabaseConnection, user_id: Uuid, restaurant_id: Uuid) -> Self {
        Self {
            db,
            user_id,
            restaurant_id,
            date: Utc::now() + Duration::days(1),
        }
    }

    /// Sets the reserved date and time.
    pub fn date(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }

    /// Builds and inserts the reservation entity into the database.
    pub async fn build(self) -> Result<entity::reservation::Model, DbErr> {
        entity::reservation::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(self.user_id),
            restaurant_id: ActiveValue::Set(self.restaurant_id),
            date: ActiveValue::Set(self.date),
            updated_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a reservation with a default date.
pub async fn create_reservation(
    db: &DatabaseConnection,
    user_id: Uuid,
    restaurant_id: Uuid,
) -> Result<entity::reservation::Model, DbErr> {
    ReservationFactory::new(db, user_id, restaurant_id)
        .build()
        .await
}

/// Creates `count` reservations for the same user and restaurant.
pub async fn create_reservations(
    db: &DatabaseConnection,
    user_id: Uuid,
    restaurant_id: Uuid,
    count: usize,
) -> Result<Vec<entity::reservation::Model>, DbErr> {
    let mut created = Vec::with_capacity(count);
    for _ in 0..count {
        created.push(create_reservation(db, user_id, restaurant_id).await?);
    }
    Ok(created)
}

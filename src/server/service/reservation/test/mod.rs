use std::time::Duration;

use chrono::{DateTime, FixedOffset, Utc};
use test_utils::fixture;
use uuid::Uuid;

use crate::server::{
    data::{
        memory::{MemoryCatalog, MemoryReservations},
        ReservationStore,
    },
    error::{auth::AuthError, reservation::ReservationError, store::StoreError, AppError},
    model::{
        reservation::{CreateReservationParam, Reservation, UpdateReservationParam},
        restaurant::Restaurant,
        user::{Role, User},
    },
    service::reservation::ReservationService,
    util::deadline::Deadline,
};


fn deadline() -> Deadline {
    Deadline::new(Duration::from_secs(10), Duration::from_secs(30))
}

fn user(role: Role) -> User {
    let entity = fixture::user_entity_builder()
        .email(format!("{}@example.com", Uuid::new_v4()))
        .role(role.as_str())
        .build();
    User::from_entity(entity).unwrap()
}

/// Restaurant open 09:00 to 22:00 with an empty menu.
fn restaurant() -> Restaurant {
    Restaurant::from_entity(
        fixture::restaurant_entity_builder()
            .hours("09:00", "22:00")
            .build(),
        vec![],
    )
}

/// Request for 14 March 2026 at `HH:MM` in UTC+07:00.
fn at(hhmm: &str) -> CreateReservationParam {
    CreateReservationParam {
        date: parse_date(&format!("2026-03-14T{}:00+07:00", hhmm)),
    }
}

fn parse_date(value: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(value).unwrap()
}

fn seed(store: &MemoryReservations, user: &User, restaurant: &Restaurant, count: usize) {
    for _ in 0..count {
        store.seed(Reservation {
            id: Uuid::new_v4(),
            user_id: user.id,
            restaurant_id: restaurant.id,
            date: Utc::now(),
            updated_at: Utc::now(),
        });
    }
}

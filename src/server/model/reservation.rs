//! Reservation domain models and parameters.

use chrono::{DateTime, FixedOffset, Utc};
use uuid::Uuid;

use crate::model::reservation::{CreateReservationDto, ReservationDto, UpdateReservationDto};

/// A booked table. `user_id` and `restaurant_id` are weak references: nothing cascades
/// when the referenced user or restaurant disappears.
#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    pub id: Uuid,
    pub user_id: Uuid,
    pub restaurant_id: Uuid,
    pub date: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Reservation {
    pub fn from_entity(entity: entity::reservation::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            restaurant_id: entity.restaurant_id,
            date: entity.date,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> ReservationDto {
        ReservationDto {
            id: self.id,
            user_id: self.user_id,
            restaurant_id: self.restaurant_id,
            date: self.date,
            updated_at: self.updated_at,
        }
    }
}

/// Candidate reservation. The submitted offset is kept so operating hours can be checked
/// against the wall-clock time the caller asked for.
#[derive(Debug, Clone)]
pub struct CreateReservationParam {
    pub date: DateTime<FixedOffset>,
}

impl CreateReservationParam {
    pub fn from_dto(dto: CreateReservationDto) -> Self {
        Self { date: dto.date }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateReservationParam {
    pub date: DateTime<Utc>,
}

impl UpdateReservationParam {
    pub fn from_dto(dto: UpdateReservationDto) -> Self {
        Self {
            date: dto.date.with_timezone(&Utc),
        }
    }
}

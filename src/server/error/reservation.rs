use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveTime;
use thiserror::Error;

use crate::server::error::error_response;

/// Booking rule violations raised while creating a reservation.
#[derive(Error, Debug, PartialEq)]
pub enum ReservationError {
    /// The user already holds the maximum number of reservations.
    #[error("You cannot create more than {cap} reservations")]
    LimitExceeded { cap: u64 },

    /// Requested time of day falls outside the restaurant's operating hours.
    #[error(
        "Requested time {} is outside operating hours {} - {}",
        .requested.format("%H:%M"),
        .open.format("%H:%M"),
        .close.format("%H:%M")
    )]
    OutOfHours {
        requested: NaiveTime,
        open: NaiveTime,
        close: NaiveTime,
    },
}

impl ReservationError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::LimitExceeded { .. } => "limit_exceeded",
            Self::OutOfHours { .. } => "out_of_hours",
        }
    }
}

/// # Returns
/// - 409 Conflict - For `LimitExceeded`
/// - 422 Unprocessable Entity - For `OutOfHours`
impl IntoResponse for ReservationError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::LimitExceeded { .. } => StatusCode::CONFLICT,
            Self::OutOfHours { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        };
        error_response(status, self.kind(), self.to_string())
    }
}

//! Booking rules shared by the reservation workflow.

use chrono::{DateTime, FixedOffset, NaiveTime, Timelike};

use crate::server::error::reservation::ReservationError;

/// Maximum number of reservations a user may hold.
pub const RESERVATION_CAP: u64 = 3;

/// Truncates a time of day to whole minutes.
pub fn to_minute(time: NaiveTime) -> NaiveTime {
    NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(time)
}

/// Wall-clock time of day a reservation was requested for, in the caller's own offset.
pub fn requested_time_of_day(date: &DateTime<FixedOffset>) -> NaiveTime {
    to_minute(date.time())
}

/// Fails once the user already holds `cap` reservations.
pub fn check_reservation_cap(held: u64, cap: u64) -> Result<(), ReservationError> {
    if held >= cap {
        return Err(ReservationError::LimitExceeded { cap });
    }
    Ok(())
}

/// Checks `requested` lies within `[open, close]` at minute granularity.
///
/// The comparison is literal: a window with `close < open` admits nothing.
pub fn check_operating_hours(
    requested: NaiveTime,
    open: NaiveTime,
    close: NaiveTime,
) -> Result<(), ReservationError> {
    let (requested, open, close) = (to_minute(requested), to_minute(open), to_minute(close));

    if requested < open || requested > close {
        return Err(ReservationError::OutOfHours {
            requested,
            open,
            close,
        });
    }
    Ok(())
}

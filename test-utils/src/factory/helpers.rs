//! Shared helper utilities for factory methods.

use chrono::NaiveTime;
use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names and emails in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Parses an `HH:MM` literal into a time of day.
///
/// Test helper only; panics on malformed input so a typo in a test fails loudly.
pub fn hm(value: &str) -> NaiveTime {
    NaiveTime::parse_from_str(value, "%H:%M").expect("test time literal must be HH:MM")
}

/// Creates a user and a restaurant open 09:00 to 22:00.
///
/// The usual starting point for booking workflow tests.
///
/// # Returns
/// - `Ok((user, restaurant))` - The created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_booking_scenario(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::restaurant::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let restaurant = crate::factory::restaurant::create_restaurant(db).await?;

    Ok((user, restaurant))
}

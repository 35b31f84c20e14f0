//! Restaurant factory for creating test restaurant entities.

use crate::factory::helpers::{hm, next_id};
use chrono::{NaiveTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test restaurants with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let restaurant = RestaurantFactory::new(&db)
///     .name("Late Noodles")
///     .hours("17:00", "23:30")
///     .build()
///     .await?;
/// ```
pub struct RestaurantFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    category: String,
    open_time: NaiveTime,
    close_time: NaiveTime,
}

impl<'a> RestaurantFactory<'a> {
    /// Creates a new RestaurantFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Restaurant {n}"`
    /// - category: `"thai"`
    /// - open/close: `09:00` / `22:00`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Restaurant {}", next_id()),
            category: "thai".to_string(),
            open_time: hm("09:00"),
            close_time: hm("22:00"),
        }
    }

    /// Sets the restaurant name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the category used for browsing.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets opening and closing time from `HH:MM` literals.
    pub fn hours(mut self, open: &str, close: &str) -> Self {
        self.open_time = hm(open);
        self.close_time = hm(close);
        self
    }

    /// Builds and inserts the restaurant entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::restaurant::Model)` - Created restaurant entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::restaurant::Model, DbErr> {
        entity::restaurant::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(self.name),
            category: ActiveValue::Set(self.category),
            address: ActiveValue::Set("1 Test Road".to_string()),
            phone_number: ActiveValue::Set("021234567".to_string()),
            open_time: ActiveValue::Set(self.open_time),
            close_time: ActiveValue::Set(self.close_time),
            updated_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a restaurant open 09:00 to 22:00.
pub async fn create_restaurant(
    db: &DatabaseConnection,
) -> Result<entity::restaurant::Model, DbErr> {
    RestaurantFactory::new(db).build().await
}

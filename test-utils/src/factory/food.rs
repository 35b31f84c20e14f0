//! Food factory for creating menu items.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating menu items belonging to a restaurant.
pub struct FoodFactory<'a> {
    db: &'a DatabaseConnection,
    restaurant_id: Uuid,
    position: i32,
    name: String,
    price: f64,
}

impl<'a> FoodFactory<'a> {
    /// Creates a new FoodFactory with default values.
    ///
    /// Defaults:
    /// - position: `0`
    /// - name: `"Dish {n}"`
    /// - price: `120.0`
    pub fn new(db: &'a DatabaseConnection, restaurant_id: Uuid) -> Self {
        Self {
            db,
            restaurant_id,
            position: 0,
            name: format!("Dish {}", next_id()),
            price: 120.0,
        }
    }

    /// Sets the position on the menu.
    pub fn position(mut self, position: i32) -> Self {
        self.position = position;
        self
    }

    /// Sets the dish name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the price.
    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    /// Builds and inserts the food entity into the database.
    pub async fn build(self) -> Result<entity::food::Model, DbErr> {
        entity::food::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            restaurant_id: ActiveValue::Set(self.restaurant_id),
            position: ActiveValue::Set(self.position),
            name: ActiveValue::Set(self.name),
            price: ActiveValue::Set(self.price),
            updated_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a menu item at the given position.
pub async fn create_food(
    db: &DatabaseConnection,
    restaurant_id: Uuid,
    position: i32,
) -> Result<entity::food::Model, DbErr> {
    FoodFactory::new(db, restaurant_id)
        .position(position)
        .build()
        .await
}

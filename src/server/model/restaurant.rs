//! Restaurant catalog domain models.

use chrono::{DateTime, NaiveTime, Utc};
use uuid::Uuid;

use crate::model::restaurant::{FoodDto, RestaurantDto};

/// Menu item belonging to a restaurant.
#[derive(Debug, Clone, PartialEq)]
pub struct Food {
    pub id: Uuid,
    pub restaurant_id: Uuid,
    /// Position on the menu; foods are always listed in ascending position.
    pub position: i32,
    pub name: String,
    pub price: f64,
    pub updated_at: DateTime<Utc>,
}

impl Food {
    pub fn from_entity(entity: entity::food::Model) -> Self {
        Self {
            id: entity.id,
            restaurant_id: entity.restaurant_id,
            position: entity.position,
            name: entity.name,
            price: entity.price,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> FoodDto {
        FoodDto {
            id: self.id,
            name: self.name,
            price: self.price,
        }
    }
}

/// Restaurant with its daily operating window and menu.
///
/// Hours are times of day only. A window whose close is earlier than its open never admits
/// a reservation; overnight windows are not represented.
#[derive(Debug, Clone, PartialEq)]
pub struct Restaurant {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub address: String,
    pub phone_number: String,
    pub open_time: NaiveTime,
    pub close_time: NaiveTime,
    pub updated_at: DateTime<Utc>,
    pub foods: Vec<Food>,
}

impl Restaurant {
    /// Converts an entity model and its foods to a restaurant domain model.
    ///
    /// Foods are sorted by menu position regardless of the order they were loaded in.
    ///
    /// # Arguments
    /// - `entity` - The restaurant entity model from the database
    /// - `foods` - Food entity models belonging to this restaurant
    ///
    /// # Returns
    /// - `Restaurant` - The converted restaurant domain model
    pub fn from_entity(entity: entity::restaurant::Model, foods: Vec<entity::food::Model>) -> Self {
        let mut foods: Vec<Food> = foods.into_iter().map(Food::from_entity).collect();
        foods.sort_by_key(|f| f.position);

        Self {
            id: entity.id,
            name: entity.name,
            category: entity.category,
            address: entity.address,
            phone_number: entity.phone_number,
            open_time: entity.open_time,
            close_time: entity.close_time,
            updated_at: entity.updated_at,
            foods,
        }
    }

    pub fn into_dto(self) -> RestaurantDto {
        RestaurantDto {
            id: self.id,
            name: self.name,
            category: self.category,
            address: self.address,
            phone_number: self.phone_number,
            open_time: self.open_time.format("%H:%M").to_string(),
            close_time: self.close_time.format("%H:%M").to_string(),
            updated_at: self.updated_at,
            foods: self.foods.into_iter().map(Food::into_dto).collect(),
        }
    }
}

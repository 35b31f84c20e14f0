use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct FoodDto {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct RestaurantDto {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub address: String,
    pub phone_number: String,
    /// Opening time of day, `HH:MM`.
    pub open_time: String,
    /// Closing time of day, `HH:MM`.
    pub close_time: String,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
    pub foods: Vec<FoodDto>,
}

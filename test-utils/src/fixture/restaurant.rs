//! Restaurant fixtures for creating in-memory test data.

use chrono::{NaiveTime, TimeZone, Utc};
use entity::restaurant;
use uuid::Uuid;

use crate::factory::helpers::hm;

/// Default test restaurant name.
pub const DEFAULT_NAME: &str = "Test Restaurant";

/// Default test category.
pub const DEFAULT_CATEGORY: &str = "thai";

/// Creates a restaurant entity model open 09:00 to 22:00.
///
/// The id is random; timestamps are fixed at 2026-01-01T00:00:00Z so fixtures compare
/// equal across calls apart from their id.
pub fn entity() -> restaurant::Model {
    entity_builder().build()
}

/// Creates a restaurant entity builder for customization.
pub fn entity_builder() -> RestaurantEntityBuilder {
    RestaurantEntityBuilder::default()
}

/// Builder for customized restaurant entity models.
pub struct RestaurantEntityBuilder {
    id: Uuid,
    name: String,
    category: String,
    open_time: NaiveTime,
    close_time: NaiveTime,
}

impl Default for RestaurantEntityBuilder {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: DEFAULT_NAME.to_string(),
            category: DEFAULT_CATEGORY.to_string(),
            open_time: hm("09:00"),
            close_time: hm("22:00"),
        }
    }
}

impl RestaurantEntityBuilder {
    /// Sets the restaurant id.
    pub fn id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// Sets the restaurant name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the category.
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

    /// Builds the restaurant entity model.
    pub fn build(self) -> restaurant::Model {
        restaurant::Model {
            id: self.id,
            name: self.name,
            category: self.category,
            address: "1 Test Road".to_string(),
            phone_number: "021234567".to_string(),
            open_time: self.open_time,
            close_time: self.close_time,
            updated_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
        }
    }
}

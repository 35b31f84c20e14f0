//! Catalog browsing.

use crate::server::{
    data::CatalogStore,
    error::AppError,
    model::restaurant::{Food, Restaurant},
    util::{deadline::Deadline, parse::parse_id},
};

pub struct RestaurantService<'a> {
    catalog: &'a dyn CatalogStore,
    deadline: Deadline,
}

impl<'a> RestaurantService<'a> {
    pub fn new(catalog: &'a dyn CatalogStore, deadline: Deadline) -> Self {
        Self { catalog, deadline }
    }

    pub async fn get_all(&self) -> Result<Vec<Restaurant>, AppError> {
        Ok(self
            .deadline
            .run("list_restaurants", self.catalog.list_restaurants())
            .await?)
    }

    pub async fn get_by_category(&self, category: &str) -> Result<Vec<Restaurant>, AppError> {
        Ok(self
            .deadline
            .run(
                "list_restaurants_by_category",
                self.catalog.list_restaurants_by_category(category),
            )
            .await?)
    }

    /// # Returns
    /// - `Ok(Restaurant)` - The restaurant with its foods in menu order
    /// - `Err(AppError::NotFound)` - Unknown or malformed id
    pub async fn get_by_id(&self, id: &str) -> Result<Restaurant, AppError> {
        let id = parse_id(id, "Restaurant")?;

        self.deadline
            .run("get_restaurant_by_id", self.catalog.get_restaurant_by_id(id))
            .await?
            .ok_or_else(|| AppError::NotFound("Restaurant not found".to_string()))
    }

    /// Menu of one restaurant, in position order.
    pub async fn get_foods(&self, restaurant_id: &str) -> Result<Vec<Food>, AppError> {
        Ok(self.get_by_id(restaurant_id).await?.foods)
    }

    pub async fn get_food(&self, restaurant_id: &str, food_id: &str) -> Result<Food, AppError> {
        let restaurant_id = parse_id(restaurant_id, "Food")?;
        let food_id = parse_id(food_id, "Food")?;

        self.deadline
            .run("get_food", self.catalog.get_food(restaurant_id, food_id))
            .await?
            .ok_or_else(|| AppError::NotFound("Food not found".to_string()))
    }
}

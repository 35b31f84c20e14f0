//! Restaurant catalog repository.

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter, QueryOrder, Select,
};
use uuid::Uuid;

use crate::server::{
    data::CatalogStore,
    error::store::StoreError,
    model::restaurant::{Food, Restaurant},
};

/// SeaORM-backed catalog store.
///
/// Owns a clone of the connection pool so it can live behind `Arc<dyn CatalogStore>` in
/// application state.
#[derive(Clone)]
pub struct CatalogRepository {
    db: DatabaseConnection,
}

impl CatalogRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads restaurants matching `query` together with their foods.
    async fn load_with_foods(
        &self,
        query: Select<entity::restaurant::Entity>,
    ) -> Result<Vec<Restaurant>, StoreError> {
        let rows = query
            .order_by_asc(entity::restaurant::Column::Name)
            .find_with_related(entity::prelude::Food)
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(restaurant, foods)| Restaurant::from_entity(restaurant, foods))
            .collect())
    }
}

#[async_trait]
impl CatalogStore for CatalogRepository {
    async fn get_restaurant_by_id(&self, id: Uuid) -> Result<Option<Restaurant>, StoreError> {
        let Some(restaurant) = entity::prelude::Restaurant::find_by_id(id)
            .one(&self.db)
            .await?
        else {
            return Ok(None);
        };

        let foods = restaurant
            .find_related(entity::prelude::Food)
            .order_by_asc(entity::food::Column::Position)
            .all(&self.db)
            .await?;

        Ok(Some(Restaurant::from_entity(restaurant, foods)))
    }

    async fn list_restaurants(&self) -> Result<Vec<Restaurant>, StoreError> {
        self.load_with_foods(entity::prelude::Restaurant::find())
            .await
    }

    async fn list_restaurants_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<Restaurant>, StoreError> {
        self.load_with_foods(
            entity::prelude::Restaurant::find()
                .filter(entity::restaurant::Column::Category.eq(category)),
        )
        .await
    }

    async fn get_food(
        &self,
        restaurant_id: Uuid,
        food_id: Uuid,
    ) -> Result<Option<Food>, StoreError> {
        let food = entity::prelude::Food::find_by_id(food_id)
            .filter(entity::food::Column::RestaurantId.eq(restaurant_id))
            .one(&self.db)
            .await?;

        Ok(food.map(Food::from_entity))
    }
}

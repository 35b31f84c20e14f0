//! Reservation repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Statement,
};
use uuid::Uuid;

use crate::server::{
    data::ReservationStore, error::store::StoreError, model::reservation::Reservation,
};

/// Inserts the row only while the user's reservation count is below the bound parameter.
///
/// A single statement, so SQLite's write lock makes the count and the insert atomic.
const INSERT_IF_UNDER_CAP: &str = r#"
INSERT INTO "reservation" ("id", "user_id", "restaurant_id", "date", "updated_at")
SELECT ?, ?, ?, ?, ?
WHERE (SELECT COUNT(*) FROM "reservation" WHERE "user_id" = ?) < ?"#;

#[derive(Clone)]
pub struct ReservationRepository {
    db: DatabaseConnection,
}

impl ReservationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReservationStore for ReservationRepository {
    async fn count_for_user(&self, user_id: Uuid) -> Result<u64, StoreError> {
        let count = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::UserId.eq(user_id))
            .count(&self.db)
            .await?;

        Ok(count)
    }

    async fn insert_if_under_cap(
        &self,
        reservation: Reservation,
        cap: u64,
    ) -> Result<Option<Reservation>, StoreError> {
        let cap = i64::try_from(cap).unwrap_or(i64::MAX);
        let statement = Statement::from_sql_and_values(
            self.db.get_database_backend(),
            INSERT_IF_UNDER_CAP,
            [
                reservation.id.into(),
                reservation.user_id.into(),
                reservation.restaurant_id.into(),
                reservation.date.into(),
                reservation.updated_at.into(),
                reservation.user_id.into(),
                cap.into(),
            ],
        );

        let result = self.db.execute_raw(statement).await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        Ok(Some(reservation))
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Reservation>, StoreError> {
        let entity = entity::prelude::Reservation::find_by_id(id)
            .one(&self.db)
            .await?;

        Ok(entity.map(Reservation::from_entity))
    }

    async fn list_all(&self) -> Result<Vec<Reservation>, StoreError> {
        let entities = entity::prelude::Reservation::find()
            .order_by_asc(entity::reservation::Column::Date)
            .all(&self.db)
            .await?;

        Ok(entities.into_iter().map(Reservation::from_entity).collect())
    }

    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Reservation>, StoreError> {
        let entities = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::UserId.eq(user_id))
            .order_by_asc(entity::reservation::Column::Date)
            .all(&self.db)
            .await?;

        Ok(entities.into_iter().map(Reservation::from_entity).collect())
    }

    async fn update_date(
        &self,
        id: Uuid,
        date: DateTime<Utc>,
    ) -> Result<Option<Reservation>, StoreError> {
        let Some(existing) = entity::prelude::Reservation::find_by_id(id)
            .one(&self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::reservation::ActiveModel = existing.into();
        active.date = ActiveValue::Set(date);
        active.updated_at = ActiveValue::Set(Utc::now());
        let updated = active.update(&self.db).await?;

        Ok(Some(Reservation::from_entity(updated)))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let result = entity::prelude::Reservation::delete_by_id(id)
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

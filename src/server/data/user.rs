//! User repository backing the identity store.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    SqlErr,
};
use uuid::Uuid;

use crate::server::{
    data::IdentityStore,
    error::store::StoreError,
    model::user::{NewUserParam, User},
};

#[derive(Clone)]
pub struct UserRepository {
    db: DatabaseConnection,
}

impl UserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl IdentityStore for UserRepository {
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(&self.db)
            .await?;

        entity.map(User::from_entity).transpose()
    }

    /// Inserts the account, mapping a unique-email violation to `Ok(None)`.
    async fn create_user(&self, param: NewUserParam) -> Result<Option<User>, StoreError> {
        let result = entity::user::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            email: ActiveValue::Set(param.email),
            password_hash: ActiveValue::Set(param.password_hash),
            role: ActiveValue::Set(param.role.to_string()),
            username: ActiveValue::Set(param.username),
            phone_number: ActiveValue::Set(param.phone_number),
            updated_at: ActiveValue::Set(Utc::now()),
        }
        .insert(&self.db)
        .await;

        match result {
            Ok(entity) => Ok(Some(User::from_entity(entity)?)),
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }
}

use crate::server::{
    data::{user::UserRepository, IdentityStore},
    error::store::StoreError,
    model::user::{NewUserParam, Role},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create_user;
mod get_user_by_email;

fn new_user(email: &str) -> NewUserParam {
    NewUserParam {
        email: email.to_string(),
        password_hash: factory::user::DEFAULT_PASSWORD_HASH.to_string(),
        role: Role::User,
        username: "diner".to_string(),
        phone_number: "0800000000".to_string(),
    }
}

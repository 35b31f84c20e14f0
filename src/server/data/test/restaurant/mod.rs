use crate::server::data::{restaurant::CatalogRepository, CatalogStore};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, food::FoodFactory, helpers::hm, restaurant::RestaurantFactory},
};
use uuid::Uuid;

mod get_food;
mod get_restaurant_by_id;
mod list_restaurants;

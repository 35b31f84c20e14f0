use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, restaurant::FoodDto},
    server::{
        error::AppError, model::restaurant::Food, service::restaurant::RestaurantService,
        state::AppState,
    },
};

/// Tag for grouping menu endpoints in OpenAPI documentation
pub static FOOD_TAG: &str = "food";

/// Menu of a restaurant in position order.
#[utoipa::path(
    get,
    path = "/food/restaurant/{restaurant_id}",
    tag = FOOD_TAG,
    security(("bearer" = [])),
    params(
        ("restaurant_id" = String, Path, description = "Restaurant id (UUID)")
    ),
    responses(
        (status = 200, description = "Menu items", body = Vec<FoodDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Restaurant not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_foods_by_restaurant(
    State(state): State<AppState>,
    Path(restaurant_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let foods = RestaurantService::new(state.catalog.as_ref(), state.deadline())
        .get_foods(&restaurant_id)
        .await?;

    let dtos: Vec<FoodDto> = foods.into_iter().map(Food::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Single menu item.
#[utoipa::path(
    get,
    path = "/food/{restaurant_id}/{food_id}",
    tag = FOOD_TAG,
    security(("bearer" = [])),
    params(
        ("restaurant_id" = String, Path, description = "Restaurant id (UUID)"),
        ("food_id" = String, Path, description = "Food id (UUID)")
    ),
    responses(
        (status = 200, description = "The menu item", body = FoodDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Food not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_food(
    State(state): State<AppState>,
    Path((restaurant_id, food_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let food = RestaurantService::new(state.catalog.as_ref(), state.deadline())
        .get_food(&restaurant_id, &food_id)
        .await?;

    Ok((StatusCode::OK, Json(food.into_dto())))
}

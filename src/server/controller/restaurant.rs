use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, restaurant::RestaurantDto},
    server::{
        error::AppError, model::restaurant::Restaurant, service::restaurant::RestaurantService,
        state::AppState,
    },
};

/// Tag for grouping restaurant endpoints in OpenAPI documentation
pub static RESTAURANT_TAG: &str = "restaurant";

/// List every restaurant with its menu.
#[utoipa::path(
    get,
    path = "/restaurant",
    tag = RESTAURANT_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "All restaurants", body = Vec<RestaurantDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_restaurants(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let restaurants = RestaurantService::new(state.catalog.as_ref(), state.deadline())
        .get_all()
        .await?;

    let dtos: Vec<RestaurantDto> = restaurants.into_iter().map(Restaurant::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// List restaurants in one category.
#[utoipa::path(
    get,
    path = "/restaurant/category/{category}",
    tag = RESTAURANT_TAG,
    security(("bearer" = [])),
    params(
        ("category" = String, Path, description = "Exact category name")
    ),
    responses(
        (status = 200, description = "Restaurants in the category", body = Vec<RestaurantDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_restaurants_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let restaurants = RestaurantService::new(state.catalog.as_ref(), state.deadline())
        .get_by_category(&category)
        .await?;

    let dtos: Vec<RestaurantDto> = restaurants.into_iter().map(Restaurant::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get one restaurant by id.
///
/// # Access Control
/// - `Admin` - Only admins can look up restaurants by id
#[utoipa::path(
    get,
    path = "/restaurant/{id}",
    tag = RESTAURANT_TAG,
    security(("bearer" = [])),
    params(
        ("id" = String, Path, description = "Restaurant id (UUID)")
    ),
    responses(
        (status = 200, description = "The restaurant", body = RestaurantDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Restaurant not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_restaurant_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let restaurant = RestaurantService::new(state.catalog.as_ref(), state.deadline())
        .get_by_id(&id)
        .await?;

    Ok((StatusCode::OK, Json(restaurant.into_dto())))
}

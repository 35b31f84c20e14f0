//! Route table, middleware layering and API documentation.
//!
//! Public routes: sign-up, login, health and Swagger UI. Everything else sits behind
//! `authenticate`; admin-only handlers additionally carry `require_admin`.

use axum::{
    handler::Handler,
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::{ErrorDto, HealthDto},
        reservation::{CreateReservationDto, ReservationDto, UpdateReservationDto},
        restaurant::{FoodDto, RestaurantDto},
        user::{LoginDto, SignUpDto, TokenDto, UserDto},
    },
    server::{
        controller::{auth, food, health, reservation, restaurant},
        middleware::auth::{authenticate, require_admin},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "TableBook API", description = "Restaurant browsing and table reservations"),
    paths(
        auth::sign_up,
        auth::login,
        auth::me,
        restaurant::get_restaurants,
        restaurant::get_restaurants_by_category,
        restaurant::get_restaurant_by_id,
        food::get_foods_by_restaurant,
        food::get_food,
        reservation::get_reservations,
        reservation::get_my_reservations,
        reservation::get_reservation_by_id,
        reservation::create_reservation,
        reservation::update_reservation,
        reservation::delete_reservation,
        health::health,
    ),
    components(schemas(
        ErrorDto,
        HealthDto,
        SignUpDto,
        LoginDto,
        TokenDto,
        UserDto,
        RestaurantDto,
        FoodDto,
        ReservationDto,
        CreateReservationDto,
        UpdateReservationDto,
    )),
    modifiers(&BearerAuth),
)]
pub struct ApiDoc;

/// Registers the `bearer` security scheme referenced by protected paths.
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

pub fn router(state: AppState) -> Router {
    let public = Router::new()
        .route("/authen/signup", post(auth::sign_up))
        .route("/authen/login", post(auth::login))
        .route("/health", get(health::health));

    let protected = Router::new()
        .route("/user/me", get(auth::me))
        .route("/restaurant", get(restaurant::get_restaurants))
        .route(
            "/restaurant/category/{category}",
            get(restaurant::get_restaurants_by_category),
        )
        .route(
            "/restaurant/{id}",
            get(restaurant::get_restaurant_by_id.layer(from_fn(require_admin))),
        )
        .route(
            "/food/restaurant/{restaurant_id}",
            get(food::get_foods_by_restaurant),
        )
        .route("/food/{restaurant_id}/{food_id}", get(food::get_food))
        .route(
            "/reservation",
            get(reservation::get_reservations.layer(from_fn(require_admin))),
        )
        .route("/reservation/user", get(reservation::get_my_reservations))
        .route(
            "/reservation/{id}",
            get(reservation::get_reservation_by_id.layer(from_fn(require_admin)))
                .post(reservation::create_reservation)
                .put(reservation::update_reservation)
                .delete(reservation::delete_reservation),
        )
        .route_layer(from_fn_with_state(state.clone(), authenticate));

    Router::new()
        .merge(public)
        .merge(protected)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

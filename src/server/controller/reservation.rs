use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        reservation::{CreateReservationDto, ReservationDto, UpdateReservationDto},
    },
    server::{
        error::AppError,
        model::{
            reservation::{CreateReservationParam, Reservation, UpdateReservationParam},
            user::Identity,
        },
        service::{auth::AuthService, reservation::ReservationService},
        state::AppState,
    },
};

/// Tag for grouping reservation endpoints in OpenAPI documentation
pub static RESERVATION_TAG: &str = "reservation";

/// List every reservation.
///
/// # Access Control
/// - `Admin` - Only admins can list all reservations
#[utoipa::path(
    get,
    path = "/reservation",
    tag = RESERVATION_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "All reservations", body = Vec<ReservationDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reservations(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let deadline = state.deadline();
    let service =
        ReservationService::new(state.catalog.as_ref(), state.reservations.as_ref(), deadline);
    let reservations = service.get_all().await?;

    let dtos: Vec<ReservationDto> = reservations
        .into_iter()
        .map(Reservation::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// List the caller's own reservations.
#[utoipa::path(
    get,
    path = "/reservation/user",
    tag = RESERVATION_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Caller's reservations", body = Vec<ReservationDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_reservations(
    State(state): State<AppState>,
    identity: Identity,
) -> Result<impl IntoResponse, AppError> {
    let deadline = state.deadline();
    let user = AuthService::new(state.users.as_ref(), &state.tokens, deadline)
        .current_user(&identity)
        .await?;

    let service =
        ReservationService::new(state.catalog.as_ref(), state.reservations.as_ref(), deadline);
    let reservations = service.get_for_user(&user).await?;

    let dtos: Vec<ReservationDto> = reservations
        .into_iter()
        .map(Reservation::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get one reservation by id.
///
/// # Access Control
/// - `Admin` - Only admins can look up arbitrary reservations
#[utoipa::path(
    get,
    path = "/reservation/{id}",
    tag = RESERVATION_TAG,
    security(("bearer" = [])),
    params(
        ("id" = String, Path, description = "Reservation id (UUID)")
    ),
    responses(
        (status = 200, description = "The reservation", body = ReservationDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reservation_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let deadline = state.deadline();
    let service =
        ReservationService::new(state.catalog.as_ref(), state.reservations.as_ref(), deadline);
    let reservation = service.get_by_id(&id).await?;

    Ok((StatusCode::OK, Json(reservation.into_dto())))
}

/// Book a table at a restaurant for the caller.
///
/// # Returns
/// - `201 Created` - Reservation persisted
/// - `404 Not Found` - Unknown or malformed restaurant id
/// - `409 Conflict` - Caller already holds the maximum number of reservations
/// - `422 Unprocessable Entity` - Requested time outside opening hours
/// - `504 Gateway Timeout` - Store did not answer in time
#[utoipa::path(
    post,
    path = "/reservation/{restaurant_id}",
    tag = RESERVATION_TAG,
    security(("bearer" = [])),
    params(
        ("restaurant_id" = String, Path, description = "Restaurant id (UUID)")
    ),
    request_body = CreateReservationDto,
    responses(
        (status = 201, description = "Reservation created", body = ReservationDto),
        (status = 400, description = "Malformed body", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Restaurant not found", body = ErrorDto),
        (status = 409, description = "Reservation limit reached", body = ErrorDto),
        (status = 422, description = "Outside operating hours", body = ErrorDto),
        (status = 504, description = "Store timeout", body = ErrorDto)
    ),
)]
pub async fn create_reservation(
    State(state): State<AppState>,
    identity: Identity,
    Path(restaurant_id): Path<String>,
    payload: Result<Json<CreateReservationDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let deadline = state.deadline();

    let user = AuthService::new(state.users.as_ref(), &state.tokens, deadline)
        .current_user(&identity)
        .await?;

    let service =
        ReservationService::new(state.catalog.as_ref(), state.reservations.as_ref(), deadline);
    let reservation = service
        .create(&user, &restaurant_id, CreateReservationParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(reservation.into_dto())))
}

/// Move a reservation to a new date.
///
/// # Access Control
/// - Owner of the reservation or an admin
#[utoipa::path(
    put,
    path = "/reservation/{id}",
    tag = RESERVATION_TAG,
    security(("bearer" = [])),
    params(
        ("id" = String, Path, description = "Reservation id (UUID)")
    ),
    request_body = UpdateReservationDto,
    responses(
        (status = 200, description = "Reservation updated", body = ReservationDto),
        (status = 400, description = "Malformed body", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Reservation not found", body = ErrorDto)
    ),
)]
pub async fn update_reservation(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<String>,
    payload: Result<Json<UpdateReservationDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let deadline = state.deadline();

    let user = AuthService::new(state.users.as_ref(), &state.tokens, deadline)
        .current_user(&identity)
        .await?;

    let service =
        ReservationService::new(state.catalog.as_ref(), state.reservations.as_ref(), deadline);
    let reservation = service
        .update(&user, &id, UpdateReservationParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(reservation.into_dto())))
}

/// Cancel a reservation.
///
/// # Access Control
/// - Owner of the reservation or an admin
#[utoipa::path(
    delete,
    path = "/reservation/{id}",
    tag = RESERVATION_TAG,
    security(("bearer" = [])),
    params(
        ("id" = String, Path, description = "Reservation id (UUID)")
    ),
    responses(
        (status = 204, description = "Reservation deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Reservation not found", body = ErrorDto)
    ),
)]
pub async fn delete_reservation(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let deadline = state.deadline();

    let user = AuthService::new(state.users.as_ref(), &state.tokens, deadline)
        .current_user(&identity)
        .await?;

    let service =
        ReservationService::new(state.catalog.as_ref(), state.reservations.as_ref(), deadline);
    service.delete(&user, &id).await?;

    Ok(StatusCode::NO_CONTENT)
}

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        user::{LoginDto, SignUpDto, TokenDto, UserDto},
    },
    server::{
        error::AppError,
        model::user::{Identity, LoginParam, SignUpParam},
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new account.
///
/// Creates an account with the `user` role and returns an access token for it.
///
/// # Returns
/// - `201 Created` - Account created, token returned
/// - `400 Bad Request` - Invalid body, weak password or email already registered
/// - `500 Internal Server Error` - Hashing, signing or database failure
#[utoipa::path(
    post,
    path = "/authen/signup",
    tag = AUTH_TAG,
    request_body = SignUpDto,
    responses(
        (status = 201, description = "Account created", body = TokenDto),
        (status = 400, description = "Invalid sign-up data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn sign_up(
    State(state): State<AppState>,
    payload: Result<Json<SignUpDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let token = AuthService::new(state.users.as_ref(), &state.tokens, state.deadline())
        .sign_up(SignUpParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(TokenDto { token })))
}

/// Log in with email and password.
///
/// # Returns
/// - `200 OK` - Credentials valid, token returned
/// - `401 Unauthorized` - Unknown email or wrong password
#[utoipa::path(
    post,
    path = "/authen/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = TokenDto),
        (status = 400, description = "Malformed body", body = ErrorDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let token = AuthService::new(state.users.as_ref(), &state.tokens, state.deadline())
        .login(LoginParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(TokenDto { token })))
}

/// Profile of the authenticated caller.
#[utoipa::path(
    get,
    path = "/user/me",
    tag = AUTH_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn me(
    State(state): State<AppState>,
    identity: Identity,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(state.users.as_ref(), &state.tokens, state.deadline())
        .current_user(&identity)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

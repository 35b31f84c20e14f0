//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error returned by controllers and services. Every variant maps
//! to an HTTP status and an `ErrorDto` carrying a machine-readable `kind` so clients can tell a
//! missing restaurant from a full reservation quota without parsing messages.

pub mod auth;
pub mod config;
pub mod internal;
pub mod reservation;
pub mod store;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, internal::InternalError,
        reservation::ReservationError, store::StoreError,
    },
};

/// Top-level application error type.
///
/// Domain errors (`AuthError`, `ReservationError`, `StoreError`) carry their own status
/// mapping; the remaining variants use standard mappings.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization failure (401 / 403).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Booking rule violation (409 / 422).
    #[error(transparent)]
    ReservationErr(#[from] ReservationError),

    /// Persistence failure or store deadline expiry (500 / 504).
    #[error(transparent)]
    StoreErr(#[from] StoreError),

    /// Database error outside a store call, e.g. while connecting or migrating at startup.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Socket or listener error at startup.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Unexpected internal failure; details are logged, never returned.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),
}

impl AppError {
    /// Machine-readable kind reported in the `kind` field of the error body.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::AuthErr(err) => err.kind(),
            Self::ReservationErr(err) => err.kind(),
            Self::StoreErr(err) => err.kind(),
            Self::NotFound(_) => "not_found",
            Self::BadRequest(_) => "bad_request",
            Self::ConfigErr(_)
            | Self::DbErr(_)
            | Self::IoErr(_)
            | Self::InternalErr(_) => "internal",
        }
    }
}

/// Malformed or missing JSON bodies are reported through the same error shape as every
/// other rejection instead of axum's plain-text default.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Builds the JSON error body used by every rejected request.
pub(crate) fn error_response(
    status: StatusCode,
    kind: &str,
    message: impl Into<String>,
) -> Response {
    (
        status,
        Json(ErrorDto {
            kind: kind.to_string(),
            error: message.into(),
        }),
    )
        .into_response()
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest`
/// - 404 Not Found - For `NotFound`
/// - Variable - For `AuthErr`, `ReservationErr` and `StoreErr`, delegated to the wrapped error
/// - 500 Internal Server Error - For everything else, with a generic message
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let kind = self.kind();
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::ReservationErr(err) => err.into_response(),
            Self::StoreErr(err) => err.into_response(),
            Self::NotFound(msg) => error_response(StatusCode::NOT_FOUND, kind, msg),
            Self::BadRequest(msg) => error_response(StatusCode::BAD_REQUEST, kind, msg),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error and returns a generic message so implementation details never reach the
/// client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal",
            "Internal server error",
        )
    }
}

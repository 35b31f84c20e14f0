use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::{error::error_response, model::user::Role};

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization` header on a protected route.
    #[error("Missing authorization header")]
    MissingToken,

    /// Token failed signature, algorithm, expiry or structural validation.
    ///
    /// The underlying reason is logged but never returned to the client.
    #[error("Invalid access token: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),

    /// A protected handler ran without an identity in the request context.
    ///
    /// Happens only if a route is mounted outside the authentication layer.
    #[error("Request carries no authenticated identity")]
    MissingIdentity,

    /// Identity is valid but its role does not grant access.
    #[error("Role '{actual}' does not have '{required}' access")]
    InsufficientRole { required: Role, actual: Role },

    /// Acting user neither owns the reservation nor is an admin.
    #[error("User {user_id} does not own reservation {reservation_id}")]
    NotOwner {
        user_id: uuid::Uuid,
        reservation_id: uuid::Uuid,
    },

    /// Token is valid but its subject no longer exists.
    #[error("No account exists for {0}")]
    UnknownAccount(String),

    /// Login attempt with an unknown email or a wrong password.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Sign-up attempt with an email that is already registered.
    #[error("Email {0} is already registered")]
    EmailTaken(String),
}

impl AuthError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingToken
            | Self::InvalidToken(_)
            | Self::MissingIdentity
            | Self::UnknownAccount(_)
            | Self::InvalidCredentials => "unauthorized",
            Self::InsufficientRole { .. } | Self::NotOwner { .. } => "forbidden",
            Self::EmailTaken(_) => "bad_request",
        }
    }
}

/// Converts authentication errors into HTTP responses.
///
/// Every failure is logged at debug level; client-facing messages stay generic so a caller
/// cannot distinguish an expired token from a forged one.
///
/// # Returns
/// - 400 Bad Request - For `EmailTaken`
/// - 401 Unauthorized - For missing, invalid or orphaned credentials
/// - 403 Forbidden - For role or ownership mismatches
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let kind = self.kind();
        match self {
            Self::MissingToken | Self::InvalidToken(_) | Self::MissingIdentity => {
                error_response(StatusCode::UNAUTHORIZED, kind, "Unauthorized")
            }
            Self::UnknownAccount(_) => {
                error_response(StatusCode::UNAUTHORIZED, kind, "Account no longer exists")
            }
            Self::InvalidCredentials => {
                error_response(StatusCode::UNAUTHORIZED, kind, "Invalid email or password")
            }
            Self::InsufficientRole { .. } => error_response(
                StatusCode::FORBIDDEN,
                kind,
                "You do not have permission to access this resource",
            ),
            Self::NotOwner { .. } => error_response(
                StatusCode::FORBIDDEN,
                kind,
                "You can only modify your own reservations",
            ),
            Self::EmailTaken(_) => {
                error_response(StatusCode::BAD_REQUEST, kind, "Email is already registered")
            }
        }
    }
}

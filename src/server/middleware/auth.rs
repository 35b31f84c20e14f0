//! Authorization gate.
//!
//! `authenticate` runs on every protected route: it validates the bearer token and stores the
//! caller's `Identity` in request extensions. `require_admin` is layered on individual admin
//! routes after it. Handlers take `Identity` as an extractor.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};

use crate::server::{
    error::{auth::AuthError, AppError},
    model::user::{Identity, Role},
    state::AppState,
};

/// Validates the `Authorization` header and attaches the caller's identity.
///
/// # Returns
/// - The downstream response when the token is valid
/// - `401 Unauthorized` - Header missing, token invalid, expired or signed with a foreign
///   algorithm
pub async fn authenticate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let identity = state.tokens.authenticate(header)?;
    request.extensions_mut().insert(identity);

    Ok(next.run(request).await)
}

/// Checks the identity attached by `authenticate` against a required role.
///
/// # Arguments
/// - `identity` - Identity from request extensions, if any
/// - `required` - Role the route demands
///
/// # Returns
/// - `Ok(&Identity)` - Role matches
/// - `Err(AuthError::MissingIdentity)` - Route is not behind `authenticate`
/// - `Err(AuthError::InsufficientRole)` - Role differs from the required one
pub fn authorize_role(identity: Option<&Identity>, required: Role) -> Result<&Identity, AuthError> {
    let identity = identity.ok_or(AuthError::MissingIdentity)?;

    if identity.role != required {
        return Err(AuthError::InsufficientRole {
            required,
            actual: identity.role,
        });
    }

    Ok(identity)
}

/// Rejects callers whose role is not `admin`.
pub async fn require_admin(request: Request, next: Next) -> Result<Response, AppError> {
    authorize_role(request.extensions().get::<Identity>(), Role::Admin)?;

    Ok(next.run(request).await)
}

impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .cloned()
            .ok_or_else(|| AuthError::MissingIdentity.into())
    }
}

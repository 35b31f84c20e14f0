use axum::http::{Method, StatusCode};

use crate::server::{
    error::auth::AuthError,
    middleware::auth::authorize_role,
    model::user::{Identity, Role},
    service::token::Claims,
    test_support::Harness,
};

use std::time::Duration;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

/// Failures raised by catalog, reservation and identity stores.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A store call did not complete within its deadline.
    #[error("Store operation '{operation}' timed out after {after:?}")]
    Timeout {
        operation: &'static str,
        after: Duration,
    },

    /// The backing database rejected or failed the operation.
    #[error(transparent)]
    Db(#[from] sea_orm::DbErr),

    /// A stored record could not be converted into its domain model.
    #[error("Corrupt record: {0}")]
    Corrupt(String),
}

impl StoreError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Timeout { .. } => "timeout",
            Self::Db(_) | Self::Corrupt(_) => "store_error",
        }
    }
}

/// # Returns
/// - 504 Gateway Timeout - For `Timeout`
/// - 500 Internal Server Error - For database and conversion failures, details logged only
impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        let kind = self.kind();
        match self {
            Self::Timeout { .. } => {
                tracing::warn!("{}", self);
                error_response(StatusCode::GATEWAY_TIMEOUT, kind, "Store did not respond in time")
            }
            err => {
                tracing::error!("{}", err);
                error_response(StatusCode::INTERNAL_SERVER_ERROR, kind, "Internal server error")
            }
        }
    }
}

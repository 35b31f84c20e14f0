use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of every rejected request.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct ErrorDto {
    /// Machine-readable error kind, e.g. `limit_exceeded`.
    pub kind: String,
    /// Human-readable message.
    pub error: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct HealthDto {
    pub status: String,
}

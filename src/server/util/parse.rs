use uuid::Uuid;

use crate::server::error::AppError;

/// Parses a resource id taken from a request path.
///
/// A malformed id cannot match any stored record, so it is reported the same way as an
/// unknown one.
///
/// # Arguments
/// - `value` - The raw path segment
/// - `resource` - Resource name used in the error message, e.g. `"Restaurant"`
///
/// # Returns
/// - `Ok(Uuid)` - Successfully parsed id
/// - `Err(AppError::NotFound)` - The value is not a valid UUID
pub fn parse_id(value: &str, resource: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(value.trim()).map_err(|_| AppError::NotFound(format!("{} not found", resource)))
}

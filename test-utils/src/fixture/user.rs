//! User fixtures for creating in-memory test data.

use chrono::{TimeZone, Utc};
use entity::user;
use uuid::Uuid;

use crate::factory::user::DEFAULT_PASSWORD_HASH;

/// Default test email.
pub const DEFAULT_EMAIL: &str = "diner@example.com";

/// Creates a regular user entity model.
pub fn entity() -> user::Model {
    entity_builder().build()
}

/// Creates a user entity builder for customization.
pub fn entity_builder() -> UserEntityBuilder {
    UserEntityBuilder::default()
}

/// Builder for customized user entity models.
pub struct UserEntityBuilder {
    id: Uuid,
    email: String,
    password_hash: String,
    role: String,
}

impl Default for UserEntityBuilder {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            email: DEFAULT_EMAIL.to_string(),
            password_hash: DEFAULT_PASSWORD_HASH.to_string(),
            role: "user".to_string(),
        }
    }
}

impl UserEntityBuilder {
    /// Sets the email.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the stored password hash.
    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = password_hash.into();
        self
    }

    /// Sets the raw role string, valid or not.
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// Builds the user entity model.
    pub fn build(self) -> user::Model {
        user::Model {
            id: self.id,
            email: self.email,
            password_hash: self.password_hash,
            role: self.role,
            username: "Diner".to_string(),
            phone_number: "0800000000".to_string(),
            updated_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
        }
    }
}

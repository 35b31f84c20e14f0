//! User, role and identity domain models.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    model::user::{LoginDto, SignUpDto, UserDto},
    server::error::store::StoreError,
};

/// Access level carried by every identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            other => Err(format!("unknown role '{}'", other)),
        }
    }
}

/// Authenticated caller established by the token gate.
///
/// Lives in request extensions for the rest of the request; handlers extract it directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub email: String,
    pub role: Role,
}

/// Registered account.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    /// Argon2 PHC string. Never leaves the server.
    pub password_hash: String,
    pub role: Role,
    pub username: String,
    pub phone_number: String,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Converts the user domain model to a DTO for API responses, dropping the password hash.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            role: self.role.to_string(),
            username: self.username,
            phone_number: self.phone_number,
            updated_at: self.updated_at,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(StoreError::Corrupt)` - Stored role is not one of the known roles
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, StoreError> {
        let role = entity
            .role
            .parse::<Role>()
            .map_err(|e| StoreError::Corrupt(format!("user {}: {}", entity.id, e)))?;

        Ok(Self {
            id: entity.id,
            email: entity.email,
            password_hash: entity.password_hash,
            role,
            username: entity.username,
            phone_number: entity.phone_number,
            updated_at: entity.updated_at,
        })
    }
}

/// Account to be persisted by the identity store. The password is already hashed.
#[derive(Debug, Clone)]
pub struct NewUserParam {
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub username: String,
    pub phone_number: String,
}

/// Sign-up input with the plaintext password still attached.
#[derive(Clone)]
pub struct SignUpParam {
    pub email: String,
    pub password: String,
    pub username: String,
    pub phone_number: String,
}

impl SignUpParam {
    pub fn from_dto(dto: SignUpDto) -> Self {
        Self {
            email: dto.email.trim().to_string(),
            password: dto.password,
            username: dto.username,
            phone_number: dto.phone_number,
        }
    }
}

#[derive(Clone)]
pub struct LoginParam {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for SignUpParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignUpParam")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("username", &self.username)
            .field("phone_number", &self.phone_number)
            .finish()
    }
}

impl LoginParam {
    pub fn from_dto(dto: LoginDto) -> Self {
        Self {
            email: dto.email.trim().to_string(),
            password: dto.password,
        }
    }
}

impl fmt::Debug for LoginParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginParam")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

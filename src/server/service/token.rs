//! Access token issuance and verification.
//!
//! Tokens are HS256-signed JWTs carrying the caller's email and role. Verification accepts
//! any HMAC-SHA2 algorithm with the shared secret and rejects everything else, including
//! `none` and asymmetric algorithms. Expiry is enforced with zero leeway.

use std::time::Duration;

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::{
    error::{auth::AuthError, internal::InternalError},
    model::user::{Identity, Role},
};

const BEARER_PREFIX: &str = "Bearer ";

/// Claims carried inside an access token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    pub email: String,
    pub role: Role,
    /// Expiry as seconds since the Unix epoch.
    pub exp: i64,
}

/// Signs and verifies access tokens with the server's shared secret.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenService {
    /// # Arguments
    /// - `secret` - Shared HMAC secret
    /// - `ttl` - Lifetime of issued tokens
    pub fn new(secret: &str, ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl,
        }
    }

    /// Issues a token for the given account, valid for the configured TTL.
    pub fn issue(&self, email: &str, role: Role) -> Result<String, InternalError> {
        let ttl = chrono::Duration::from_std(self.ttl).unwrap_or(chrono::Duration::hours(1));
        let claims = Claims {
            email: email.to_string(),
            role,
            exp: (Utc::now() + ttl).timestamp(),
        };

        self.sign(&claims)
    }

    pub fn sign(&self, claims: &Claims) -> Result<String, InternalError> {
        jsonwebtoken::encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(InternalError::TokenSigning)
    }

    /// Establishes the caller's identity from an `Authorization` header value.
    ///
    /// A leading `Bearer ` is stripped if present; a bare token is accepted as well.
    ///
    /// # Arguments
    /// - `header` - Raw header value, or `None` if the header was absent
    ///
    /// # Returns
    /// - `Ok(Identity)` - Signature, algorithm and expiry all valid
    /// - `Err(AuthError::MissingToken)` - No header or an empty token
    /// - `Err(AuthError::InvalidToken)` - Any validation failure, including missing claims
    pub fn authenticate(&self, header: Option<&str>) -> Result<Identity, AuthError> {
        let raw = header.unwrap_or_default().trim_start();
        let token = raw.strip_prefix(BEARER_PREFIX).unwrap_or(raw).trim();
        if token.is_empty() {
            return Err(AuthError::MissingToken);
        }

        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &self.validation)?;

        Ok(Identity {
            email: data.claims.email,
            role: data.claims.role,
        })
    }
}

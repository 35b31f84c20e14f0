//! Account registration, login and identity resolution.

use crate::server::{
    data::IdentityStore,
    error::{auth::AuthError, internal::InternalError, AppError},
    model::user::{Identity, LoginParam, NewUserParam, Role, SignUpParam, User},
    service::token::TokenService,
    util::{
        deadline::Deadline,
        password::{hash_password, verify_password},
    },
};

const MIN_PASSWORD_LEN: usize = 8;

pub struct AuthService<'a> {
    users: &'a dyn IdentityStore,
    tokens: &'a TokenService,
    deadline: Deadline,
}

impl<'a> AuthService<'a> {
    pub fn new(users: &'a dyn IdentityStore, tokens: &'a TokenService, deadline: Deadline) -> Self {
        Self {
            users,
            tokens,
            deadline,
        }
    }

    /// Registers a new account with the `user` role and returns an access token for it.
    ///
    /// # Returns
    /// - `Ok(String)` - Signed access token
    /// - `Err(AppError::BadRequest)` - Email or password fails basic validation
    /// - `Err(AuthError::EmailTaken)` - Email already registered
    pub async fn sign_up(&self, param: SignUpParam) -> Result<String, AppError> {
        if !param.email.contains('@') {
            return Err(AppError::BadRequest("A valid email is required".to_string()));
        }
        if param.password.len() < MIN_PASSWORD_LEN {
            return Err(AppError::BadRequest(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LEN
            )));
        }

        let password = param.password;
        let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
            .await
            .map_err(InternalError::BlockingTask)??;

        let created = self
            .deadline
            .run(
                "create_user",
                self.users.create_user(NewUserParam {
                    email: param.email.clone(),
                    password_hash,
                    role: Role::User,
                    username: param.username,
                    phone_number: param.phone_number,
                }),
            )
            .await?
            .ok_or_else(|| AuthError::EmailTaken(param.email.clone()))?;

        tracing::info!(user_id = %created.id, "Registered new account");

        Ok(self.tokens.issue(&created.email, created.role)?)
    }

    /// Verifies credentials and returns an access token.
    ///
    /// Unknown emails and wrong passwords produce the same error.
    pub async fn login(&self, param: LoginParam) -> Result<String, AppError> {
        let Some(user) = self
            .deadline
            .run("get_user_by_email", self.users.get_user_by_email(&param.email))
            .await?
        else {
            return Err(AuthError::InvalidCredentials.into());
        };

        let password = param.password;
        let stored_hash = user.password_hash.clone();
        let verified =
            tokio::task::spawn_blocking(move || verify_password(&password, &stored_hash))
                .await
                .map_err(InternalError::BlockingTask)?;
        if !verified {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(self.tokens.issue(&user.email, user.role)?)
    }

    /// Resolves an authenticated identity to its stored account.
    ///
    /// # Returns
    /// - `Ok(User)` - The account the token was issued for
    /// - `Err(AuthError::UnknownAccount)` - The account was removed after the token was issued
    pub async fn current_user(&self, identity: &Identity) -> Result<User, AppError> {
        self.deadline
            .run("get_user_by_email", self.users.get_user_by_email(&identity.email))
            .await?
            .ok_or_else(|| AuthError::UnknownAccount(identity.email.clone()).into())
    }
}

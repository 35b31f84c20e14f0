//! Application state shared across all request handlers.
//!
//! Holds the immutable configuration, the token service and the three stores. Every field is
//! reference counted, so cloning the state per request is cheap.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    data::{
        reservation::ReservationRepository, restaurant::CatalogRepository, user::UserRepository,
        CatalogStore, IdentityStore, ReservationStore,
    },
    service::token::TokenService,
    util::deadline::Deadline,
};

#[derive(Clone)]
pub struct AppState {
    /// Configuration loaded once at startup.
    pub config: Arc<Config>,

    /// Signs and verifies access tokens with `config.secret_key`.
    pub tokens: Arc<TokenService>,

    pub users: Arc<dyn IdentityStore>,
    pub catalog: Arc<dyn CatalogStore>,
    pub reservations: Arc<dyn ReservationStore>,
}

impl AppState {
    /// Creates the production state backed by SeaORM repositories.
    ///
    /// # Arguments
    /// - `config` - Loaded configuration
    /// - `db` - Connected and migrated database pool
    pub fn new(config: Config, db: DatabaseConnection) -> Self {
        Self::with_stores(
            config,
            Arc::new(UserRepository::new(db.clone())),
            Arc::new(CatalogRepository::new(db.clone())),
            Arc::new(ReservationRepository::new(db)),
        )
    }

    /// Creates a state over arbitrary store implementations.
    pub fn with_stores(
        config: Config,
        users: Arc<dyn IdentityStore>,
        catalog: Arc<dyn CatalogStore>,
        reservations: Arc<dyn ReservationStore>,
    ) -> Self {
        let tokens = TokenService::new(&config.secret_key, config.token_ttl);

        Self {
            config: Arc::new(config),
            tokens: Arc::new(tokens),
            users,
            catalog,
            reservations,
        }
    }

    /// Starts the store-call deadline for one request.
    pub fn deadline(&self) -> Deadline {
        Deadline::from_config(&self.config)
    }
}

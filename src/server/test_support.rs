//! Router harness over in-memory stores.

use std::{sync::Arc, time::Duration};

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use test_utils::fixture;
use tower::ServiceExt;

use crate::server::{
    config::Config,
    data::memory::{MemoryCatalog, MemoryIdentities, MemoryReservations},
    model::{
        restaurant::Restaurant,
        user::{Role, User},
    },
    router,
    state::AppState,
};

pub struct Harness {
    pub state: AppState,
    pub reservations: Arc<MemoryReservations>,
    pub user: User,
    pub other_user: User,
    pub admin: User,
    /// Open 09:00 to 22:00.
    pub restaurant: Restaurant,
}

pub fn config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        secret_key: "router-test-secret".to_string(),
        bind_addr: "127.0.0.1:0".to_string(),
        store_timeout: Duration::from_secs(10),
        request_timeout: Duration::from_secs(30),
        token_ttl: Duration::from_secs(3600),
    }
}

fn account(email: &str, role: Role) -> User {
    User::from_entity(
        fixture::user_entity_builder()
            .email(email)
            .role(role.as_str())
            .build(),
    )
    .unwrap()
}

impl Harness {
    pub fn new() -> Self {
        let user = account("diner@example.com", Role::User);
        let other_user = account("other@example.com", Role::User);
        let admin = account("boss@example.com", Role::Admin);
        let restaurant = Restaurant::from_entity(
            fixture::restaurant_entity_builder()
                .hours("09:00", "22:00")
                .build(),
            vec![],
        );

        let reservations = Arc::new(MemoryReservations::default());
        let state = AppState::with_stores(
            config(),
            Arc::new(MemoryIdentities::with_users(vec![
                user.clone(),
                other_user.clone(),
                admin.clone(),
            ])),
            Arc::new(MemoryCatalog::with_restaurants(vec![restaurant.clone()])),
            reservations.clone(),
        );

        Self {
            state,
            reservations,
            user,
            other_user,
            admin,
            restaurant,
        }
    }

    pub fn token(&self, user: &User) -> String {
        self.state.tokens.issue(&user.email, user.role).unwrap()
    }

    pub fn app(&self) -> Router {
        router::router(self.state.clone())
    }

    /// Sends one request through a fresh router and returns the status and JSON body.
    ///
    /// An empty body is returned as `Value::Null`.
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            request = request.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(body) => request
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => request.body(Body::empty()).unwrap(),
        };

        let response = self.app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, json)
    }
}

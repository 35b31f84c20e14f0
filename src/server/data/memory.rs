//! In-memory store doubles for service and router tests.

use std::{sync::Mutex, time::Duration};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::server::{
    data::{CatalogStore, IdentityStore, ReservationStore},
    error::store::StoreError,
    model::{
        reservation::Reservation,
        restaurant::{Food, Restaurant},
        user::{NewUserParam, User},
    },
};

#[derive(Default)]
pub struct MemoryCatalog {
    restaurants: Mutex<Vec<Restaurant>>,
}

impl MemoryCatalog {
    pub fn with_restaurants(restaurants: Vec<Restaurant>) -> Self {
        Self {
            restaurants: Mutex::new(restaurants),
        }
    }
}

#[async_trait]
impl CatalogStore for MemoryCatalog {
    async fn get_restaurant_by_id(&self, id: Uuid) -> Result<Option<Restaurant>, StoreError> {
        let restaurants = self.restaurants.lock().unwrap();
        Ok(restaurants.iter().find(|r| r.id == id).cloned())
    }

    async fn list_restaurants(&self) -> Result<Vec<Restaurant>, StoreError> {
        let mut restaurants = self.restaurants.lock().unwrap().clone();
        restaurants.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(restaurants)
    }

    async fn list_restaurants_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<Restaurant>, StoreError> {
        let mut restaurants: Vec<Restaurant> = self
            .restaurants
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.category == category)
            .cloned()
            .collect();
        restaurants.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(restaurants)
    }

    async fn get_food(
        &self,
        restaurant_id: Uuid,
        food_id: Uuid,
    ) -> Result<Option<Food>, StoreError> {
        let restaurants = self.restaurants.lock().unwrap();
        Ok(restaurants
            .iter()
            .filter(|r| r.id == restaurant_id)
            .flat_map(|r| r.foods.iter())
            .find(|f| f.id == food_id)
            .cloned())
    }
}

/// Reservation store with an optional artificial latency on every call.
#[derive(Default)]
pub struct MemoryReservations {
    rows: Mutex<Vec<Reservation>>,
    latency: Option<Duration>,
}

impl MemoryReservations {
    pub fn with_latency(latency: Duration) -> Self {
        Self {
            rows: Mutex::default(),
            latency: Some(latency),
        }
    }

    pub fn snapshot(&self) -> Vec<Reservation> {
        self.rows.lock().unwrap().clone()
    }

    /// Seeds a reservation directly, bypassing the cap.
    pub fn seed(&self, reservation: Reservation) {
        self.rows.lock().unwrap().push(reservation);
    }

    async fn delay(&self) {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
    }
}

#[async_trait]
impl ReservationStore for MemoryReservations {
    async fn count_for_user(&self, user_id: Uuid) -> Result<u64, StoreError> {
        self.delay().await;
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().filter(|r| r.user_id == user_id).count() as u64)
    }

    async fn insert_if_under_cap(
        &self,
        reservation: Reservation,
        cap: u64,
    ) -> Result<Option<Reservation>, StoreError> {
        self.delay().await;
        let mut rows = self.rows.lock().unwrap();
        let held = rows
            .iter()
            .filter(|r| r.user_id == reservation.user_id)
            .count() as u64;
        if held >= cap {
            return Ok(None);
        }
        rows.push(reservation.clone());
        Ok(Some(reservation))
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Reservation>, StoreError> {
        self.delay().await;
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|r| r.id == id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Reservation>, StoreError> {
        self.delay().await;
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by_key(|r| r.date);
        Ok(rows)
    }

    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Reservation>, StoreError> {
        let mut rows: Vec<Reservation> = self
            .list_all()
            .await?
            .into_iter()
            .filter(|r| r.user_id == user_id)
            .collect();
        rows.sort_by_key(|r| r.date);
        Ok(rows)
    }

    async fn update_date(
        &self,
        id: Uuid,
        date: DateTime<Utc>,
    ) -> Result<Option<Reservation>, StoreError> {
        self.delay().await;
        let mut rows = self.rows.lock().unwrap();
        let Some(row) = rows.iter_mut().find(|r| r.id == id) else {
            return Ok(None);
        };
        row.date = date;
        row.updated_at = Utc::now();
        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        self.delay().await;
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|r| r.id != id);
        Ok(rows.len() < before)
    }
}

#[derive(Default)]
pub struct MemoryIdentities {
    users: Mutex<Vec<User>>,
}

impl MemoryIdentities {
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Mutex::new(users),
        }
    }
}

#[async_trait]
impl IdentityStore for MemoryIdentities {
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn create_user(&self, param: NewUserParam) -> Result<Option<User>, StoreError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == param.email) {
            return Ok(None);
        }
        let user = User {
            id: Uuid::new_v4(),
            email: param.email,
            password_hash: param.password_hash,
            role: param.role,
            username: param.username,
            phone_number: param.phone_number,
            updated_at: Utc::now(),
        };
        users.push(user.clone());
        Ok(Some(user))
    }
}

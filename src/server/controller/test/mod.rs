use axum::http::{Method, StatusCode};
use serde_json::json;

use crate::server::{data::ReservationStore, test_support::Harness};

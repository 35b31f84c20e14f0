//! Per-request deadline for store calls.

use std::{future::Future, time::Duration};

use tokio::time::Instant;

use crate::server::{config::Config, error::store::StoreError};

/// Time budget for the store calls made on behalf of one request.
///
/// Each call is bounded by the per-call timeout or by whatever remains of the request
/// budget, whichever is shorter. Copies share the same expiry.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    expires_at: Instant,
    per_call: Duration,
}

impl Deadline {
    /// Starts a deadline now.
    ///
    /// # Arguments
    /// - `per_call` - Upper bound for any single store call
    /// - `total` - Upper bound for all calls together
    pub fn new(per_call: Duration, total: Duration) -> Self {
        Self {
            expires_at: Instant::now() + total,
            per_call,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.store_timeout, config.request_timeout)
    }

    pub fn remaining(&self) -> Duration {
        self.expires_at.saturating_duration_since(Instant::now())
    }

    /// Runs a store call under this deadline.
    ///
    /// # Arguments
    /// - `operation` - Name of the store operation, reported on timeout
    /// - `call` - The store future
    ///
    /// # Returns
    /// - The call's own result if it finishes in time
    /// - `Err(StoreError::Timeout)` - The call was cancelled at the deadline
    pub async fn run<T, F>(&self, operation: &'static str, call: F) -> Result<T, StoreError>
    where
        F: Future<Output = Result<T, StoreError>>,
    {
        let budget = self.per_call.min(self.remaining());

        match tokio::time::timeout(budget, call).await {
            Ok(result) => result,
            Err(_) => Err(StoreError::Timeout {
                operation,
                after: budget,
            }),
        }
    }
}

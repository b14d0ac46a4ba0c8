//! Storage abstraction for the slash-command handler.
//!
//! Provides a trait over the restaurant store so handlers can be tested
//! without a database. The production implementation wraps the concrete
//! `lunchbox_core::storage::Storage` while tests substitute the in-memory
//! mock.

use std::{future::Future, pin::Pin, sync::Arc};

use chrono::Utc;
use lunchbox_core::{error::Result, storage::Storage, Restaurant};

/// Store operations required by the slash-command handler.
///
/// The handler holds an `Arc<dyn RestaurantStore>` constructed once at
/// startup; nothing is opened per request.
pub trait RestaurantStore: Send + Sync + 'static {
    /// Persists a new restaurant with a store-generated identifier and a
    /// creation timestamp assigned at write time.
    fn add(&self, name: String) -> Pin<Box<dyn Future<Output = Result<Restaurant>> + Send + '_>>;

    /// Fetches up to `limit` restaurants, most recently added first.
    fn list_recent(
        &self,
        limit: i64,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Restaurant>>> + Send + '_>>;

    /// Verifies the store is reachable. Used by health endpoints.
    fn ping(&self) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>>;
}

/// Production store implementation using PostgreSQL.
///
/// Wraps the repository layer so all database operations go through it.
pub struct PostgresRestaurantStore {
    storage: Arc<Storage>,
}

impl PostgresRestaurantStore {
    /// Creates a new PostgreSQL store adapter.
    pub fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }
}

impl RestaurantStore for PostgresRestaurantStore {
    fn add(&self, name: String) -> Pin<Box<dyn Future<Output = Result<Restaurant>> + Send + '_>> {
        let storage = self.storage.clone();
        Box::pin(async move {
            let created = Utc::now();
            let id = storage.restaurants.create(&name, created).await?;
            Ok(Restaurant { id, name, created })
        })
    }

    fn list_recent(
        &self,
        limit: i64,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Restaurant>>> + Send + '_>> {
        let storage = self.storage.clone();
        Box::pin(async move { storage.restaurants.list_recent(limit).await })
    }

    fn ping(&self) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
        let storage = self.storage.clone();
        Box::pin(async move { storage.health_check().await })
    }
}

pub mod mock {
    //! Mock store implementation for testing.
    //!
    //! Stores rows in-memory with store-assigned sequential identifiers.
    //! Supports injecting failures to exercise the handler's error paths.

    use std::{
        future::Future,
        pin::Pin,
        sync::{
            atomic::{AtomicI64, Ordering},
            Arc,
        },
    };

    use chrono::{DateTime, Utc};
    use lunchbox_core::{error::Result, CoreError, Restaurant, RestaurantId};
    use tokio::sync::RwLock;

    use super::RestaurantStore;

    /// In-memory restaurant store for handler tests.
    ///
    /// Identifiers are assigned sequentially on insert, mirroring the
    /// database's generated keys. `fail_with` makes every subsequent
    /// operation return a store error.
    #[derive(Default)]
    pub struct MockRestaurantStore {
        rows: Arc<RwLock<Vec<Restaurant>>>,
        next_id: AtomicI64,
        failure: Arc<RwLock<Option<String>>>,
    }

    impl MockRestaurantStore {
        /// Creates a new mock store with empty state.
        pub fn new() -> Self {
            Self {
                rows: Arc::new(RwLock::new(Vec::new())),
                next_id: AtomicI64::new(0),
                failure: Arc::new(RwLock::new(None)),
            }
        }

        /// Makes all subsequent operations fail with the given message.
        pub async fn fail_with(&self, message: &str) {
            *self.failure.write().await = Some(message.to_string());
        }

        /// Seeds a row with an explicit creation timestamp, bypassing the
        /// trait. Returns the assigned identifier.
        pub async fn seed(&self, name: &str, created: DateTime<Utc>) -> RestaurantId {
            let id = RestaurantId(self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
            self.rows.write().await.push(Restaurant { id, name: name.to_string(), created });
            id
        }

        /// Returns a snapshot of every stored row in insertion order.
        pub async fn rows(&self) -> Vec<Restaurant> {
            self.rows.read().await.clone()
        }

        async fn check_failure(&self) -> Result<()> {
            match self.failure.read().await.as_ref() {
                Some(message) => Err(CoreError::Database(message.clone())),
                None => Ok(()),
            }
        }
    }

    impl RestaurantStore for MockRestaurantStore {
        fn add(
            &self,
            name: String,
        ) -> Pin<Box<dyn Future<Output = Result<Restaurant>> + Send + '_>> {
            Box::pin(async move {
                self.check_failure().await?;
                let id = RestaurantId(self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
                let restaurant = Restaurant { id, name, created: Utc::now() };
                self.rows.write().await.push(restaurant.clone());
                Ok(restaurant)
            })
        }

        fn list_recent(
            &self,
            limit: i64,
        ) -> Pin<Box<dyn Future<Output = Result<Vec<Restaurant>>> + Send + '_>> {
            Box::pin(async move {
                self.check_failure().await?;
                let mut rows = self.rows.read().await.clone();
                // Newest first; identifiers break ties for rows created
                // within the same clock tick.
                rows.sort_by(|a, b| b.created.cmp(&a.created).then(b.id.0.cmp(&a.id.0)));
                rows.truncate(usize::try_from(limit).unwrap_or(0));
                Ok(rows)
            })
        }

        fn ping(&self) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
            Box::pin(async move { self.check_failure().await })
        }
    }
}

//! Database access layer implementing the repository pattern.
//!
//! The repository layer translates between domain models and the database
//! schema. All database operations go through these repositories; direct SQL
//! queries outside this module are forbidden to maintain consistency.

use std::sync::Arc;

use sqlx::PgPool;

pub mod restaurants;

use crate::error::Result;

/// Container for repository instances providing unified database access.
///
/// Manages a shared connection pool constructed once at startup. Individual
/// requests acquire connections from the pool per call; nothing is opened
/// per request.
#[derive(Clone)]
pub struct Storage {
    /// Repository for restaurant operations.
    pub restaurants: Arc<restaurants::Repository>,
}

impl Storage {
    /// Creates a new storage instance with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        let pool = Arc::new(pool);

        Self { restaurants: Arc::new(restaurants::Repository::new(pool)) }
    }

    /// Performs a health check on the database connection.
    ///
    /// Executes a lightweight query to verify connectivity. Used by the
    /// `/health` and `/ready` endpoints.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Database` if the connection is unhealthy or the
    /// query times out.
    pub async fn health_check(&self) -> Result<()> {
        let _: (i32,) = sqlx::query_as("SELECT 1").fetch_one(&*self.restaurants.pool()).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn storage_can_be_created() {
        // Verifies the Storage struct can be instantiated without a live
        // database. Actual query testing happens in integration tests.
        let pool = sqlx::PgPool::connect_lazy("postgresql://test").unwrap();
        let _storage = Storage::new(pool);
    }
}

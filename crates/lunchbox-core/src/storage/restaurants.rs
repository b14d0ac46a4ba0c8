//! Repository for restaurant database operations.
//!
//! Restaurants are append-only: `create` inserts a row with a store-generated
//! key, `list_recent` reads the newest rows back. No update or delete
//! operations exist.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::{
    error::Result,
    models::{Restaurant, RestaurantId},
};

/// Repository for restaurant database operations.
pub struct Repository {
    pool: Arc<PgPool>,
}

impl Repository {
    /// Creates a new repository instance.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Returns a reference to the database pool.
    pub fn pool(&self) -> Arc<PgPool> {
        self.pool.clone()
    }

    /// Inserts a new restaurant and returns its store-assigned identifier.
    ///
    /// The identifier is generated by the database (`BIGSERIAL`) and
    /// back-filled from the `RETURNING` clause; callers never supply one.
    ///
    /// # Errors
    ///
    /// Returns error if the insert fails.
    pub async fn create(&self, name: &str, created: DateTime<Utc>) -> Result<RestaurantId> {
        let id: i64 = sqlx::query_scalar(
            r"
            INSERT INTO restaurants (name, created)
            VALUES ($1, $2)
            RETURNING id
            ",
        )
        .bind(name)
        .bind(created)
        .fetch_one(&*self.pool)
        .await?;

        Ok(RestaurantId(id))
    }

    /// Fetches the most recently added restaurants, newest first.
    ///
    /// Results are ordered by creation time descending and capped at
    /// `limit` rows.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    pub async fn list_recent(&self, limit: i64) -> Result<Vec<Restaurant>> {
        let restaurants = sqlx::query_as::<_, Restaurant>(
            r"
            SELECT id, name, created
            FROM restaurants
            ORDER BY created DESC
            LIMIT $1
            ",
        )
        .bind(limit)
        .fetch_all(&*self.pool)
        .await?;

        Ok(restaurants)
    }
}

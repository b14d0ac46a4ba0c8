//! Domain models and strongly-typed identifiers.
//!
//! Defines the restaurant entity and its newtype ID wrapper. Restaurants are
//! append-only: they are created once and never mutated or deleted.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

type PgDb = sqlx::Postgres;
type PgValueRef<'r> = sqlx::postgres::PgValueRef<'r>;
type PgTypeInfo = sqlx::postgres::PgTypeInfo;
type PgArgumentBuffer = sqlx::postgres::PgArgumentBuffer;
type EncodeResult =
    Result<sqlx::encode::IsNull, Box<dyn std::error::Error + Send + Sync + 'static>>;
type BoxDynError = sqlx::error::BoxDynError;

/// Strongly-typed restaurant identifier.
///
/// Wraps the store-generated `BIGSERIAL` key. Identifiers are assigned by
/// the database at insert time and are never constructed client-side; a
/// `RestaurantId` therefore always refers to a persisted row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RestaurantId(pub i64);

impl fmt::Display for RestaurantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for RestaurantId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl sqlx::Type<PgDb> for RestaurantId {
    fn type_info() -> PgTypeInfo {
        <i64 as sqlx::Type<PgDb>>::type_info()
    }
}

impl<'r> sqlx::Decode<'r, PgDb> for RestaurantId {
    fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
        let id = <i64 as sqlx::Decode<PgDb>>::decode(value)?;
        Ok(Self(id))
    }
}

impl sqlx::Encode<'_, PgDb> for RestaurantId {
    fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> EncodeResult {
        <i64 as sqlx::Encode<PgDb>>::encode_by_ref(&self.0, buf)
    }
}

/// A submitted lunch option.
///
/// Created by the `add` sub-command and read back by `list`. Rows are
/// immutable once written; there is no update or delete path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Restaurant {
    /// Store-assigned identifier, populated on read from the generated key.
    pub id: RestaurantId,

    /// Free-text name supplied by the caller.
    pub name: String,

    /// Creation timestamp, assigned when the row is written. Ordering key
    /// for the list operation.
    pub created: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restaurant_id_displays_inner_value() {
        let id = RestaurantId(42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn restaurant_id_converts_from_i64() {
        let id = RestaurantId::from(7);
        assert_eq!(id, RestaurantId(7));
    }
}

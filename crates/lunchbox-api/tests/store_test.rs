//! Tests for the store abstraction and its mock implementation.
//!
//! Verifies that the trait behaves the way handlers rely on: sequential
//! store-assigned identifiers, newest-first ordering, the list cap, and
//! failure injection.

use std::sync::Arc;

use chrono::{Duration, Utc};
use lunchbox_api::{
    store::mock::MockRestaurantStore, PostgresRestaurantStore, RestaurantStore,
};
use lunchbox_core::storage::Storage;

#[tokio::test]
async fn mock_assigns_sequential_identifiers() {
    let store = MockRestaurantStore::new();

    let first = store.add("Sushi Place".to_string()).await.expect("add first");
    let second = store.add("Ramen Shop".to_string()).await.expect("add second");

    assert_eq!(first.id.0, 1);
    assert_eq!(second.id.0, 2);
    assert_eq!(first.name, "Sushi Place");
}

#[tokio::test]
async fn mock_lists_newest_first_with_cap() {
    let store = MockRestaurantStore::new();

    // Seed out of insertion order to prove ordering comes from `created`.
    let base = Utc::now();
    store.seed("Oldest", base - Duration::minutes(30)).await;
    store.seed("Newest", base).await;
    store.seed("Middle", base - Duration::minutes(15)).await;

    let listed = store.list_recent(5).await.expect("list");
    let names: Vec<&str> = listed.iter().map(|r| r.name.as_str()).collect();

    assert_eq!(names, ["Newest", "Middle", "Oldest"]);

    for i in 0..10 {
        store.seed(&format!("Filler {i}"), base + Duration::seconds(i + 1)).await;
    }

    let listed = store.list_recent(5).await.expect("list");
    assert_eq!(listed.len(), 5);
    assert_eq!(listed[0].name, "Filler 9");
}

#[tokio::test]
async fn mock_failure_injection_covers_every_operation() {
    let store = MockRestaurantStore::new();
    store.fail_with("boom").await;

    assert!(store.add("Sushi Place".to_string()).await.is_err());
    assert!(store.list_recent(5).await.is_err());
    assert!(store.ping().await.is_err());
}

#[tokio::test]
async fn postgres_store_can_be_constructed() {
    // Construction does not touch the network; query behavior is covered by
    // the handler tests through the trait.
    let pool = sqlx::PgPool::connect_lazy("postgresql://test").expect("lazy pool");
    let _store = PostgresRestaurantStore::new(Arc::new(Storage::new(pool)));
}

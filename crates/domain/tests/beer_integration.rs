//! Integration tests for the beer stock service.
//!
//! These tests drive the service end to end against the in-memory store,
//! covering the documented scenarios and concurrent adjustments.

use std::sync::Arc;

use beer_store::{BeerStore, InMemoryBeerStore, StoreError};
use domain::{BeerDto, BeerError, BeerId, BeerLookup, BeerService, BeerType, StockBound};

/// Helper to create a test beer service
fn create_service() -> BeerService<InMemoryBeerStore> {
    BeerService::new(InMemoryBeerStore::new())
}

fn beer(name: &str, max: i32, quantity: i32) -> BeerDto {
    BeerDto::new(name, "Ambev", max, BeerType::Lager).with_quantity(quantity)
}

mod scenarios {
    use super::*;

    #[tokio::test]
    async fn create_returns_assigned_id() {
        let service = create_service();

        let created = service.create(beer("Skol", 100, 10)).await.unwrap();

        assert!(created.id.is_some());
        assert_eq!(created.quantity, 10);
        assert_eq!(created.max, 100);
    }

    #[tokio::test]
    async fn increment_within_capacity() {
        let service = create_service();
        let id = service.create(beer("Skol", 100, 10)).await.unwrap().id.unwrap();

        let result = service.increment(id, 10).await.unwrap();
        assert_eq!(result.quantity, 20);
    }

    #[tokio::test]
    async fn increment_over_capacity_fails() {
        let service = create_service();
        let id = service.create(beer("Skol", 50, 10)).await.unwrap().id.unwrap();

        let result = service.increment(id, 80).await;
        assert!(matches!(
            result,
            Err(BeerError::StockExceeded {
                bound: StockBound::Max,
                quantity: 10,
                amount: 80,
                max: 50,
                ..
            })
        ));
    }

    #[tokio::test]
    async fn increment_after_sum_over_capacity_fails() {
        let service = create_service();
        let id = service.create(beer("Skol", 50, 30)).await.unwrap().id.unwrap();

        let result = service.increment(id, 45).await;
        assert!(matches!(result, Err(BeerError::StockExceeded { .. })));
    }

    #[tokio::test]
    async fn decrement_within_stock() {
        let service = create_service();
        let id = service.create(beer("Skol", 100, 30)).await.unwrap().id.unwrap();

        let result = service.decrement(id, 5).await.unwrap();
        assert_eq!(result.quantity, 25);
    }

    #[tokio::test]
    async fn decrement_to_empty_stock() {
        let service = create_service();
        let id = service.create(beer("Skol", 100, 10)).await.unwrap().id.unwrap();

        let result = service.decrement(id, 10).await.unwrap();
        assert_eq!(result.quantity, 0);

        // The record is still there, just empty
        assert_eq!(service.find_by_name("Skol").await.unwrap().quantity, 0);
    }

    #[tokio::test]
    async fn decrement_below_zero_fails() {
        let service = create_service();
        let id = service.create(beer("Skol", 100, 10)).await.unwrap().id.unwrap();

        let result = service.decrement(id, 80).await;
        assert!(matches!(
            result,
            Err(BeerError::StockExceeded {
                bound: StockBound::Empty,
                ..
            })
        ));
    }
}

mod store_effects {
    use super::*;

    #[tokio::test]
    async fn failures_leave_store_unchanged() {
        let service = create_service();
        let id = service.create(beer("Skol", 50, 10)).await.unwrap().id.unwrap();
        let before = service.store().find_all().await.unwrap();

        let _ = service.create(beer("Skol", 10, 0)).await;
        let _ = service.increment(id, 41).await;
        let _ = service.decrement(id, 11).await;
        let _ = service.increment(BeerId::new(99), 1).await;
        let _ = service.delete_by_id(BeerId::new(99)).await;

        assert_eq!(service.store().find_all().await.unwrap(), before);
        assert_eq!(service.store().write_count().await, 1);
    }

    #[tokio::test]
    async fn each_successful_mutation_reads_and_writes_once() {
        let service = create_service();
        let id = service.create(beer("Skol", 50, 10)).await.unwrap().id.unwrap();
        service.increment(id, 5).await.unwrap();
        service.decrement(id, 5).await.unwrap();
        service.delete_by_id(id).await.unwrap();

        assert_eq!(service.store().read_count(), 4);
        assert_eq!(service.store().write_count().await, 4);
    }

    #[tokio::test]
    async fn list_all_follows_store_order() {
        let service = create_service();
        for name in ["Skol", "Brahma", "Bohemia"] {
            service.create(beer(name, 10, 1)).await.unwrap();
        }

        let names: Vec<_> = service
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|b| b.name)
            .collect();
        assert_eq!(names, vec!["Skol", "Brahma", "Bohemia"]);
    }

    #[tokio::test]
    async fn deleted_beer_is_not_found() {
        let service = create_service();
        let id = service.create(beer("Skol", 50, 10)).await.unwrap().id.unwrap();
        service.delete_by_id(id).await.unwrap();

        assert!(matches!(
            service.find_by_name("Skol").await,
            Err(BeerError::NotFound(BeerLookup::Name(_)))
        ));
        assert!(matches!(
            service.increment(id, 1).await,
            Err(BeerError::NotFound(BeerLookup::Id(_)))
        ));
    }
}

mod concurrency {
    use super::*;

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_increments_never_lose_updates() {
        let service = Arc::new(create_service());
        let id = service.create(beer("Skol", 1000, 0)).await.unwrap().id.unwrap();

        let mut handles = Vec::new();
        for _ in 0..50 {
            let service = service.clone();
            handles.push(tokio::spawn(async move { service.increment(id, 1).await }));
        }

        let mut succeeded = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => succeeded += 1,
                Err(BeerError::Store(StoreError::ConcurrencyConflict { .. })) => {}
                Err(e) => panic!("unexpected error: {e}"),
            }
        }

        let stored = service.find_by_name("Skol").await.unwrap();
        assert_eq!(stored.quantity, succeeded);
        assert!(succeeded >= 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_decrements_never_go_negative() {
        let service = Arc::new(create_service());
        let id = service.create(beer("Skol", 100, 5)).await.unwrap().id.unwrap();

        let mut handles = Vec::new();
        for _ in 0..20 {
            let service = service.clone();
            handles.push(tokio::spawn(async move { service.decrement(id, 1).await }));
        }
        for handle in handles {
            let _ = handle.await.unwrap();
        }

        let stored = service.find_by_name("Skol").await.unwrap();
        assert!(stored.quantity >= 0);
    }
}

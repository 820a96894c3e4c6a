use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{Beer, BeerId, NewBeer, Result, StoreError, store::BeerStore};

#[derive(Debug)]
struct InMemoryState {
    beers: BTreeMap<BeerId, Beer>,
    last_id: BeerId,
    writes: usize,
}

impl Default for InMemoryState {
    fn default() -> Self {
        Self {
            beers: BTreeMap::new(),
            last_id: BeerId::new(0),
            writes: 0,
        }
    }
}

/// In-memory beer store implementation.
///
/// Provides the same interface as the PostgreSQL implementation. Ids start
/// at 1 and are never reused, even after a delete.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBeerStore {
    state: Arc<RwLock<InMemoryState>>,
    reads: Arc<AtomicUsize>,
}

impl InMemoryBeerStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of records stored.
    pub async fn beer_count(&self) -> usize {
        self.state.read().await.beers.len()
    }

    /// Returns the number of successful writes (inserts, updates, deletes).
    pub async fn write_count(&self) -> usize {
        self.state.read().await.writes
    }

    /// Returns the number of lookups served (by id, by name, or full scans).
    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::Relaxed)
    }

    /// Removes all records. The id sequence is not reset.
    pub async fn clear(&self) {
        self.state.write().await.beers.clear();
    }
}

#[async_trait]
impl BeerStore for InMemoryBeerStore {
    async fn insert(&self, beer: NewBeer) -> Result<Beer> {
        let mut state = self.state.write().await;

        // Unique constraint simulation
        if state.beers.values().any(|b| b.name == beer.name) {
            return Err(StoreError::DuplicateName(beer.name));
        }

        let id = state.last_id.next();
        let beer = beer.into_beer(id);
        state.last_id = id;
        state.beers.insert(id, beer.clone());
        state.writes += 1;

        Ok(beer)
    }

    async fn find_by_id(&self, id: BeerId) -> Result<Option<Beer>> {
        self.reads.fetch_add(1, Ordering::Relaxed);
        let state = self.state.read().await;
        Ok(state.beers.get(&id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Beer>> {
        self.reads.fetch_add(1, Ordering::Relaxed);
        let state = self.state.read().await;
        Ok(state.beers.values().find(|b| b.name == name).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Beer>> {
        self.reads.fetch_add(1, Ordering::Relaxed);
        let state = self.state.read().await;
        Ok(state.beers.values().cloned().collect())
    }

    async fn update_quantity(&self, id: BeerId, expected: i32, quantity: i32) -> Result<Beer> {
        let mut state = self.state.write().await;

        let beer = state.beers.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        if beer.quantity != expected {
            return Err(StoreError::ConcurrencyConflict {
                id,
                expected,
                actual: beer.quantity,
            });
        }

        beer.quantity = quantity;
        let updated = beer.clone();
        state.writes += 1;

        Ok(updated)
    }

    async fn delete_by_id(&self, id: BeerId) -> Result<()> {
        let mut state = self.state.write().await;
        state.beers.remove(&id).ok_or(StoreError::NotFound(id))?;
        state.writes += 1;
        Ok(())
    }
}

use async_trait::async_trait;

use crate::{Beer, BeerId, NewBeer, Result};

/// Core trait for beer record stores.
///
/// A store owns record storage and id assignment. All implementations must
/// be thread-safe (Send + Sync).
#[async_trait]
pub trait BeerStore: Send + Sync {
    /// Inserts a new record and returns it with its assigned id.
    ///
    /// Fails with `DuplicateName` if a record with the same name exists.
    async fn insert(&self, beer: NewBeer) -> Result<Beer>;

    /// Retrieves a record by id.
    async fn find_by_id(&self, id: BeerId) -> Result<Option<Beer>>;

    /// Retrieves a record by its unique name.
    async fn find_by_name(&self, name: &str) -> Result<Option<Beer>>;

    /// Retrieves every record, in ascending id order.
    async fn find_all(&self) -> Result<Vec<Beer>>;

    /// Sets the quantity of a record if it still holds `expected`.
    ///
    /// This is a compare-and-set: if the stored quantity is no longer
    /// `expected` the call fails with `ConcurrencyConflict` and nothing is
    /// written. Fails with `NotFound` if the record is gone.
    async fn update_quantity(&self, id: BeerId, expected: i32, quantity: i32) -> Result<Beer>;

    /// Removes a record.
    ///
    /// Fails with `NotFound` if no record has the given id.
    async fn delete_by_id(&self, id: BeerId) -> Result<()>;
}

/// Extension trait providing convenience methods for beer stores.
#[async_trait]
pub trait BeerStoreExt: BeerStore {
    /// Checks if a record with the given name exists.
    async fn exists_by_name(&self, name: &str) -> Result<bool> {
        Ok(self.find_by_name(name).await?.is_some())
    }

    /// Checks if a record with the given id exists.
    async fn exists_by_id(&self, id: BeerId) -> Result<bool> {
        Ok(self.find_by_id(id).await?.is_some())
    }
}

// Blanket implementation for all BeerStore implementations
impl<T: BeerStore + ?Sized> BeerStoreExt for T {}

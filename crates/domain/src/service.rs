//! Stock service providing the beer inventory operations.

use beer_store::{BeerStore, BeerStoreExt};
use common::BeerId;

use crate::dto::BeerDto;
use crate::error::{BeerError, BeerLookup};
use crate::stock::Adjustment;

/// Service for managing beer stock.
///
/// Holds no state of its own: every call fetches what it needs from the
/// store, checks it, and issues at most one write. Failed calls never
/// write.
pub struct BeerService<S: BeerStore> {
    store: S,
}

impl<S: BeerStore> BeerService<S> {
    /// Creates a new beer service over the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns a reference to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Registers a new beer.
    ///
    /// Fails with `AlreadyRegistered` if the name is taken.
    #[tracing::instrument(skip(self, candidate), fields(name = %candidate.name))]
    pub async fn create(&self, candidate: BeerDto) -> Result<BeerDto, BeerError> {
        candidate.validate()?;

        if self.store.exists_by_name(&candidate.name).await? {
            tracing::warn!("beer name already registered");
            return Err(BeerError::AlreadyRegistered {
                name: candidate.name,
            });
        }

        let beer = self.store.insert(candidate.into()).await?;

        metrics::counter!("beers_created_total").increment(1);
        tracing::info!(id = %beer.id, "beer created");

        Ok(beer.into())
    }

    /// Loads a beer by its unique name.
    #[tracing::instrument(skip(self))]
    pub async fn find_by_name(&self, name: &str) -> Result<BeerDto, BeerError> {
        self.store
            .find_by_name(name)
            .await?
            .map(BeerDto::from)
            .ok_or_else(|| BeerError::NotFound(BeerLookup::Name(name.to_string())))
    }

    /// Lists every beer in store order.
    #[tracing::instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<BeerDto>, BeerError> {
        let beers = self.store.find_all().await?;
        Ok(beers.into_iter().map(BeerDto::from).collect())
    }

    /// Removes a beer.
    #[tracing::instrument(skip(self))]
    pub async fn delete_by_id(&self, id: BeerId) -> Result<(), BeerError> {
        if !self.store.exists_by_id(id).await? {
            return Err(BeerError::NotFound(BeerLookup::Id(id)));
        }

        self.store.delete_by_id(id).await?;

        metrics::counter!("beers_deleted_total").increment(1);
        tracing::info!("beer deleted");

        Ok(())
    }

    /// Adds `amount` units to a beer's stock, up to its `max`.
    #[tracing::instrument(skip(self))]
    pub async fn increment(&self, id: BeerId, amount: i32) -> Result<BeerDto, BeerError> {
        self.adjust(id, Adjustment::Increment(amount)).await
    }

    /// Removes `amount` units from a beer's stock, down to zero.
    #[tracing::instrument(skip(self))]
    pub async fn decrement(&self, id: BeerId, amount: i32) -> Result<BeerDto, BeerError> {
        self.adjust(id, Adjustment::Decrement(amount)).await
    }

    async fn adjust(&self, id: BeerId, adjustment: Adjustment) -> Result<BeerDto, BeerError> {
        let direction = adjustment.direction();

        let beer = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(BeerError::NotFound(BeerLookup::Id(id)))?;

        let quantity = match adjustment.apply(&beer) {
            Ok(quantity) => quantity,
            Err(e) => {
                metrics::counter!("beer_stock_rejections_total", "direction" => direction)
                    .increment(1);
                tracing::warn!(error = %e, "stock adjustment rejected");
                return Err(e);
            }
        };

        // Compare-and-set on the quantity we validated against
        let updated = self
            .store
            .update_quantity(id, beer.quantity, quantity)
            .await?;

        metrics::counter!("beer_stock_adjustments_total", "direction" => direction).increment(1);
        tracing::info!(from = beer.quantity, to = updated.quantity, "stock adjusted");

        Ok(updated.into())
    }
}

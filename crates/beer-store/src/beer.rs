use serde::{Deserialize, Serialize};

use crate::{BeerId, BeerType};

/// A persisted beer stock record.
///
/// `quantity` is kept within `0..=max` by the service layer; the
/// PostgreSQL table enforces the same bound with a check constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Beer {
    /// Store-assigned identifier.
    pub id: BeerId,

    /// Unique name of the beer.
    pub name: String,

    pub brand: String,

    /// Maximum number of units the stock can hold.
    pub max: i32,

    /// Units currently in stock.
    pub quantity: i32,

    pub beer_type: BeerType,
}

/// A beer record that has not been stored yet and so has no id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBeer {
    pub name: String,
    pub brand: String,
    pub max: i32,
    pub quantity: i32,
    pub beer_type: BeerType,
}

impl NewBeer {
    /// Creates a candidate with an empty stock.
    pub fn new(
        name: impl Into<String>,
        brand: impl Into<String>,
        max: i32,
        beer_type: BeerType,
    ) -> Self {
        Self {
            name: name.into(),
            brand: brand.into(),
            max,
            quantity: 0,
            beer_type,
        }
    }

    /// Sets the initial quantity.
    pub fn with_quantity(mut self, quantity: i32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Attaches a store-assigned id, producing the stored record.
    pub fn into_beer(self, id: BeerId) -> Beer {
        Beer {
            id,
            name: self.name,
            brand: self.brand,
            max: self.max,
            quantity: self.quantity,
            beer_type: self.beer_type,
        }
    }
}

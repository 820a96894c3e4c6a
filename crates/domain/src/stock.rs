//! Stock-bound rules for quantity adjustments.

use beer_store::Beer;

use crate::error::{BeerError, StockBound};

/// A requested change to a beer's quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjustment {
    Increment(i32),
    Decrement(i32),
}

impl Adjustment {
    /// The requested amount, as given by the caller.
    pub fn amount(&self) -> i32 {
        match self {
            Adjustment::Increment(amount) | Adjustment::Decrement(amount) => *amount,
        }
    }

    /// Label used for logs and metrics.
    pub fn direction(&self) -> &'static str {
        match self {
            Adjustment::Increment(_) => "increment",
            Adjustment::Decrement(_) => "decrement",
        }
    }

    /// Computes the quantity `beer` would hold after this adjustment.
    ///
    /// The result is always within `0..=beer.max`; anything else is
    /// rejected with `StockExceeded`. Non-positive amounts are rejected
    /// with `InvalidAmount` before the bound is looked at.
    pub fn apply(&self, beer: &Beer) -> Result<i32, BeerError> {
        let amount = self.amount();
        if amount <= 0 {
            return Err(BeerError::InvalidAmount { amount });
        }

        let (next, bound) = match self {
            Adjustment::Increment(_) => (beer.quantity.checked_add(amount), StockBound::Max),
            Adjustment::Decrement(_) => (beer.quantity.checked_sub(amount), StockBound::Empty),
        };

        match next {
            Some(quantity) if (0..=beer.max).contains(&quantity) => Ok(quantity),
            _ => Err(BeerError::StockExceeded {
                id: beer.id,
                bound,
                quantity: beer.quantity,
                amount,
                max: beer.max,
            }),
        }
    }
}

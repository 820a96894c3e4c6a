//! Domain error types.

use std::fmt;

use beer_store::StoreError;
use common::BeerId;
use thiserror::Error;

/// Key used to look a beer up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BeerLookup {
    Id(BeerId),
    Name(String),
}

impl fmt::Display for BeerLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BeerLookup::Id(id) => write!(f, "with ID {id}"),
            BeerLookup::Name(name) => write!(f, "with name {name}"),
        }
    }
}

/// Which side of the stock bound an adjustment would cross.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockBound {
    /// Quantity would go above the record's `max`.
    Max,
    /// Quantity would go below zero.
    Empty,
}

impl fmt::Display for StockBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StockBound::Max => f.write_str("exceeds the max stock capacity"),
            StockBound::Empty => f.write_str("would result in negative stock"),
        }
    }
}

/// Errors that can occur during stock service operations.
#[derive(Debug, Error)]
pub enum BeerError {
    /// A beer with the same name is already stored.
    #[error("Beer with name {name} already registered in the system")]
    AlreadyRegistered { name: String },

    /// No beer matches the lookup key.
    #[error("Beer {0} not found in the system")]
    NotFound(BeerLookup),

    /// The adjustment would move the quantity outside `0..=max`.
    #[error(
        "Beer with ID {id}: adjusting quantity {quantity} by {amount} {bound} (max {max})"
    )]
    StockExceeded {
        id: BeerId,
        bound: StockBound,
        quantity: i32,
        amount: i32,
        max: i32,
    },

    /// Increment/decrement amounts must be positive.
    #[error("Invalid quantity to adjust: {amount} (must be greater than 0)")]
    InvalidAmount { amount: i32 },

    /// A create candidate failed validation.
    #[error("Invalid beer: {0}")]
    InvalidBeer(String),

    /// An error occurred in the store.
    #[error("Store error: {0}")]
    Store(StoreError),
}

impl From<StoreError> for BeerError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(id) => BeerError::NotFound(BeerLookup::Id(id)),
            StoreError::DuplicateName(name) => BeerError::AlreadyRegistered { name },
            other => BeerError::Store(other),
        }
    }
}

//! Transfer shapes exposed to callers.

use common::{BeerId, BeerType};
use serde::{Deserialize, Serialize};

use crate::error::BeerError;

/// Longest accepted `name` / `brand`, in characters.
pub const MAX_TEXT_LEN: usize = 200;

/// A beer as seen by callers.
///
/// `id` is absent on create requests and always present on responses.
/// `quantity` defaults to 0 when omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeerDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<BeerId>,
    pub name: String,
    pub brand: String,
    pub max: i32,
    #[serde(default)]
    pub quantity: i32,
    #[serde(rename = "type")]
    pub beer_type: BeerType,
}

impl BeerDto {
    /// Creates a create candidate with an empty stock.
    pub fn new(
        name: impl Into<String>,
        brand: impl Into<String>,
        max: i32,
        beer_type: BeerType,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            brand: brand.into(),
            max,
            quantity: 0,
            beer_type,
        }
    }

    /// Sets the quantity.
    pub fn with_quantity(mut self, quantity: i32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Checks that the candidate can be stored without breaking the
    /// stock bound.
    pub fn validate(&self) -> Result<(), BeerError> {
        validate_text("name", &self.name)?;
        validate_text("brand", &self.brand)?;

        if self.max <= 0 {
            return Err(BeerError::InvalidBeer(format!(
                "max must be greater than 0, got {}",
                self.max
            )));
        }
        if self.quantity < 0 || self.quantity > self.max {
            return Err(BeerError::InvalidBeer(format!(
                "quantity must be between 0 and {}, got {}",
                self.max, self.quantity
            )));
        }

        Ok(())
    }
}

fn validate_text(field: &str, value: &str) -> Result<(), BeerError> {
    if value.trim().is_empty() {
        return Err(BeerError::InvalidBeer(format!("{field} must not be empty")));
    }
    if value.chars().count() > MAX_TEXT_LEN {
        return Err(BeerError::InvalidBeer(format!(
            "{field} must be at most {MAX_TEXT_LEN} characters"
        )));
    }
    Ok(())
}

/// Body of increment/decrement requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityDto {
    pub quantity: i32,
}

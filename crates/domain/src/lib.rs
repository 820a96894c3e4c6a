//! Domain layer for the beer stock service.
//!
//! This crate provides:
//! - `BeerDto` / `QuantityDto`, the transfer shapes exposed to callers
//! - pure conversions between stored records and transfer shapes
//! - stock-bound rules for increment/decrement
//! - `BeerService`, the stateless service over a `BeerStore`

pub mod dto;
pub mod error;
pub mod mapper;
pub mod service;
pub mod stock;

pub use common::{BeerId, BeerType};
pub use dto::{BeerDto, QuantityDto};
pub use error::{BeerError, BeerLookup, StockBound};
pub use service::BeerService;
pub use stock::Adjustment;

//! Types shared by every crate in the beer stock workspace.

mod types;

pub use types::{BeerId, BeerType, ParseBeerTypeError};

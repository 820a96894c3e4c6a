pub mod beer;
pub mod error;
pub mod memory;
pub mod postgres;
pub mod store;

pub use beer::{Beer, NewBeer};
pub use common::{BeerId, BeerType};
pub use error::{Result, StoreError};
pub use memory::InMemoryBeerStore;
pub use postgres::PostgresBeerStore;
pub use store::{BeerStore, BeerStoreExt};

pub mod beers;
pub mod health;
pub mod metrics;

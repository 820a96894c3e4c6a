//! Conversions between stored records and transfer shapes.

use beer_store::{Beer, NewBeer};

use crate::dto::BeerDto;

impl From<Beer> for BeerDto {
    fn from(beer: Beer) -> Self {
        Self {
            id: Some(beer.id),
            name: beer.name,
            brand: beer.brand,
            max: beer.max,
            quantity: beer.quantity,
            beer_type: beer.beer_type,
        }
    }
}

/// Any `id` on the transfer shape is dropped: ids are assigned by the store.
impl From<BeerDto> for NewBeer {
    fn from(dto: BeerDto) -> Self {
        Self {
            name: dto.name,
            brand: dto.brand,
            max: dto.max,
            quantity: dto.quantity,
            beer_type: dto.beer_type,
        }
    }
}

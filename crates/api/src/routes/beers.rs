//! Beer stock CRUD and stock adjustment endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use beer_store::BeerStore;
use common::BeerId;
use domain::{BeerDto, BeerService, QuantityDto};

use crate::error::ApiError;

/// Shared application state accessible from all handlers.
pub struct AppState<S: BeerStore> {
    pub beer_service: BeerService<S>,
}

// -- Handlers --

/// POST /api/v1/beers: register a new beer.
#[tracing::instrument(skip(state, payload))]
pub async fn create<S: BeerStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    payload: Result<Json<BeerDto>, JsonRejection>,
) -> Result<(StatusCode, Json<BeerDto>), ApiError> {
    let Json(beer) = payload?;
    let created = state.beer_service.create(beer).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/v1/beers: list every beer.
#[tracing::instrument(skip(state))]
pub async fn list<S: BeerStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<Vec<BeerDto>>, ApiError> {
    let beers = state.beer_service.list_all().await?;
    Ok(Json(beers))
}

/// GET /api/v1/beers/{name}: load a beer by name.
#[tracing::instrument(skip(state))]
pub async fn find_by_name<S: BeerStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(name): Path<String>,
) -> Result<Json<BeerDto>, ApiError> {
    let beer = state.beer_service.find_by_name(&name).await?;
    Ok(Json(beer))
}

/// DELETE /api/v1/beers/{id}: remove a beer.
#[tracing::instrument(skip(state))]
pub async fn delete_by_id<S: BeerStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_beer_id(&id)?;
    state.beer_service.delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /api/v1/beers/{id}/increment: add units to a beer's stock.
#[tracing::instrument(skip(state, payload))]
pub async fn increment<S: BeerStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
    payload: Result<Json<QuantityDto>, JsonRejection>,
) -> Result<Json<BeerDto>, ApiError> {
    let id = parse_beer_id(&id)?;
    let Json(body) = payload?;
    let beer = state.beer_service.increment(id, body.quantity).await?;
    Ok(Json(beer))
}

/// PATCH /api/v1/beers/{id}/decrement: remove units from a beer's stock.
#[tracing::instrument(skip(state, payload))]
pub async fn decrement<S: BeerStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
    payload: Result<Json<QuantityDto>, JsonRejection>,
) -> Result<Json<BeerDto>, ApiError> {
    let id = parse_beer_id(&id)?;
    let Json(body) = payload?;
    let beer = state.beer_service.decrement(id, body.quantity).await?;
    Ok(Json(beer))
}

fn parse_beer_id(id: &str) -> Result<BeerId, ApiError> {
    id.parse::<i64>()
        .map(BeerId::new)
        .map_err(|e| ApiError::BadRequest(format!("Invalid ID format: {e}")))
}

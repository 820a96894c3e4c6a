//! HTTP API server with observability for the beer stock service.
//!
//! Provides REST endpoints for beer registration, lookup and stock
//! adjustment, with structured logging (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, patch};
use beer_store::BeerStore;
use domain::BeerService;
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use routes::beers::AppState;

/// Creates the Axum application router with all routes and shared state.
///
/// The `{key}` segment is a beer name for `GET` and a beer id everywhere
/// else.
pub fn create_app<S: BeerStore + 'static>(
    state: Arc<AppState<S>>,
    metrics_handle: PrometheusHandle,
) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .route(
            "/api/v1/beers",
            get(routes::beers::list::<S>).post(routes::beers::create::<S>),
        )
        .route(
            "/api/v1/beers/{key}",
            get(routes::beers::find_by_name::<S>).delete(routes::beers::delete_by_id::<S>),
        )
        .route(
            "/api/v1/beers/{key}/increment",
            patch(routes::beers::increment::<S>),
        )
        .route(
            "/api/v1/beers/{key}/decrement",
            patch(routes::beers::decrement::<S>),
        )
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates the application state around the given store.
pub fn create_default_state<S: BeerStore + 'static>(store: S) -> Arc<AppState<S>> {
    Arc::new(AppState {
        beer_service: BeerService::new(store),
    })
}

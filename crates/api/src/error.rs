//! API error types with HTTP response mapping.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use beer_store::StoreError;
use domain::BeerError;

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// Bad request from the client.
    BadRequest(String),
    /// Stock service error.
    Beer(BeerError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Beer(err) => beer_error_to_response(err),
        };

        let body = serde_json::json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}

fn beer_error_to_response(err: BeerError) -> (StatusCode, String) {
    match &err {
        BeerError::AlreadyRegistered { .. }
        | BeerError::StockExceeded { .. }
        | BeerError::InvalidAmount { .. }
        | BeerError::InvalidBeer(_) => (StatusCode::BAD_REQUEST, err.to_string()),
        BeerError::NotFound(_) => (StatusCode::NOT_FOUND, err.to_string()),
        BeerError::Store(StoreError::ConcurrencyConflict { .. }) => {
            (StatusCode::CONFLICT, err.to_string())
        }
        BeerError::Store(_) => {
            tracing::error!(error = %err, "store failure");
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
    }
}

impl From<BeerError> for ApiError {
    fn from(err: BeerError) -> Self {
        ApiError::Beer(err)
    }
}

/// Request bodies that are not valid JSON or do not fit the expected shape.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::BeerId;
    use domain::{BeerLookup, StockBound};

    fn status_of(err: BeerError) -> StatusCode {
        ApiError::from(err).into_response().status()
    }

    #[test]
    fn client_errors_map_to_4xx() {
        assert_eq!(
            status_of(BeerError::AlreadyRegistered {
                name: "Skol".into()
            }),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(BeerError::StockExceeded {
                id: BeerId::new(1),
                bound: StockBound::Max,
                quantity: 10,
                amount: 80,
                max: 50,
            }),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(BeerError::InvalidAmount { amount: 0 }),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(BeerError::NotFound(BeerLookup::Id(BeerId::new(1)))),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn bad_request_body_is_json() {
        let response = ApiError::BadRequest("Invalid ID format".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response.headers()["content-type"], "application/json");
    }

    #[test]
    fn store_errors_map_by_kind() {
        assert_eq!(
            status_of(BeerError::Store(StoreError::ConcurrencyConflict {
                id: BeerId::new(1),
                expected: 1,
                actual: 2,
            })),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_of(BeerError::Store(StoreError::InvalidRow("x".into()))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}

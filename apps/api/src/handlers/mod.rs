//! # HTTP Handlers
//!
//! ```text
//! /api/v1/products
//! ├── GET    /                  list_products    200
//! ├── POST   /                  create_product   201
//! ├── DELETE /{id}              delete_product   200
//! ├── POST   /movement/{id}     create_movement  201
//! └── DELETE /movement/{id}     delete_movement  200
//! /health                       health           200 | 503
//! *                             not_found        404
//! ```
//!
//! Bodies are read as raw bytes and decoded here, so malformed JSON turns
//! into the same `{ok:false, message}` shape as every other client error.

pub mod health;
pub mod movement;
pub mod product;

use axum::body::Bytes;
use axum::routing::{get, post};
use axum::Router;
use serde::de::DeserializeOwned;
use serde::Serialize;

use stockroom_core::ValidationError;

use crate::error::ApiError;
use crate::state::AppState;

/// Client message for paths no route matches.
pub const ROUTE_NOT_FOUND_MESSAGE: &str = "Ruta no encontrada";

/// Routes mounted under `/api/v1/products`.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(product::list_products).post(product::create_product),
        )
        .route("/{id}", axum::routing::delete(product::delete_product))
        .route(
            "/movement/{id}",
            post(movement::create_movement).delete(movement::delete_movement),
        )
}

/// Fallback for unmatched paths.
pub async fn not_found() -> ApiError {
    ApiError::NotFound(ROUTE_NOT_FOUND_MESSAGE.to_string())
}

/// `{ "ok": true }`
#[derive(Debug, Serialize)]
pub struct OkResponse {
    pub ok: bool,
}

impl OkResponse {
    pub fn new() -> Self {
        OkResponse { ok: true }
    }
}

impl Default for OkResponse {
    fn default() -> Self {
        Self::new()
    }
}

/// Decodes a JSON body. An empty body decodes as `T::default()`.
pub(crate) fn parse_body<T>(body: &Bytes) -> Result<T, ValidationError>
where
    T: DeserializeOwned + Default,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    serde_json::from_slice(body).map_err(|e| ValidationError::MalformedBody(e.to_string()))
}

//! # stockroom-api
//!
//! HTTP front door for Stockroom.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        API Server                                       │
//! │                                                                         │
//! │  Client ──► TraceLayer ──► CorsLayer ──► Router                        │
//! │                                           │                             │
//! │                    ┌──────────────────────┼─────────────────────┐       │
//! │                    ▼                      ▼                     ▼       │
//! │              product handlers    movement handlers         /health      │
//! │                    │                      │                     │       │
//! │                    ▼                      ▼                     ▼       │
//! │           ProductRepository       MovementService        Database check │
//! │                    └──────────────┬───────┘                             │
//! │                                   ▼                                     │
//! │                              SQLite pool                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod state;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use config::{ApiConfig, ConfigError};
pub use error::ApiError;
pub use state::AppState;

/// Prefix for the product resource.
pub const PRODUCTS_PREFIX: &str = "/api/v1/products";

/// Builds the application router.
///
/// The collection answers with and without a trailing slash. Unmatched
/// paths get the JSON 404 shape.
pub fn app(state: AppState) -> Router {
    Router::new()
        .nest(PRODUCTS_PREFIX, handlers::product_routes())
        .route(
            &format!("{PRODUCTS_PREFIX}/"),
            get(handlers::product::list_products).post(handlers::product::create_product),
        )
        .route("/health", get(handlers::health::health))
        .fallback(handlers::not_found)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

//! # stockroom-core: Pure Business Logic for Stockroom
//!
//! This crate holds the inventory rules as pure functions with zero I/O
//! dependencies. The database crate and the HTTP app build on top of it.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 HTTP API (apps/api, axum)                       │   │
//! │  │    GET/POST /api/v1/products, POST /movement/{id}, DELETE ...   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ stockroom-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   stock   │  │ validation│  │   error   │  │   │
//! │  │   │  Product  │  │StockChange│  │  fields   │  │ CoreError │  │   │
//! │  │   │  Movement │  │   plan    │  │  quantity │  │Validation │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 stockroom-db (Database Layer)                   │   │
//! │  │      SQLite pool, migrations, repositories, movement service    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Movement, MovementKind, request DTOs)
//! - [`stock`] - Stock arithmetic for purchases and sales
//! - [`validation`] - Input validation rules
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use stockroom_core::stock::plan_movement;
//! use stockroom_core::{MovementKind, Product};
//!
//! let product = Product { id: 1, name: "Café".into(), price: None, stock: 5 };
//!
//! let change = plan_movement(&product, MovementKind::Sale, 3).unwrap();
//! assert_eq!(change.new_stock, 2);
//!
//! assert!(plan_movement(&product, MovementKind::Sale, 6).is_err());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod stock;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use stock::StockChange;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Number of products returned by the product listing.
///
/// The listing is a "most recent" view, not a paginated one.
pub const RECENT_PRODUCTS_LIMIT: u32 = 10;

/// Maximum length of a product name, in characters.
pub const MAX_PRODUCT_NAME_LEN: usize = 200;

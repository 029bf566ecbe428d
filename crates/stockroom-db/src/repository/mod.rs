//! # Repository Module
//!
//! Database repository implementations for Stockroom.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  HTTP handler / MovementService                                        │
//! │       │                                                                 │
//! │       │  db.products().list_recent(10)                                 │
//! │       ▼                                                                 │
//! │  ProductRepository                    MovementRepository               │
//! │  ├── list_recent(limit)               ├── insert_in(conn, ...)         │
//! │  ├── create(new_product)              ├── get_by_id(id)                │
//! │  ├── get_by_id(id)                    ├── delete_by_id(id)             │
//! │  ├── delete_by_id(id)                 └── count_for_product(id)        │
//! │  └── adjust_stock_in(conn, id, delta)                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Methods ending in `_in` take a `&mut SqliteConnection` so the caller can
//! run them inside a transaction (`&mut *tx`).
//!
//! ## Available Repositories
//!
//! - [`ProductRepository`](product::ProductRepository) - Product CRUD and stock counter
//! - [`MovementRepository`](movement::MovementRepository) - Movement ledger rows

pub mod movement;
pub mod product;

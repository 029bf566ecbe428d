//! # stockroom-db: Database Layer for Stockroom
//!
//! This crate provides database access for Stockroom.
//! It uses SQLite for storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Data Flow                              │
//! │                                                                         │
//! │  HTTP handler (POST /api/v1/products/movement/{id})                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   stockroom-db (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │               │    │  (embedded)  │  │   │
//! │  │   │               │    │ ProductRepo   │    │ 001_init.sql │  │   │
//! │  │   │ SqlitePool    │◄───│ MovementRepo  │    │              │  │   │
//! │  │   │ begin()       │    └───────────────┘    └──────────────┘  │   │
//! │  │   └───────────────┘            ▲                               │   │
//! │  │           ▲                    │                               │   │
//! │  │           └──── MovementService (service.rs) ──────────────    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite Database (stockroom.db)                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database and inventory error types
//! - [`repository`] - Repository implementations (product, movement)
//! - [`service`] - Transactional movement service
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stockroom_core::MovementRequest;
//! use stockroom_db::{Database, DbConfig, MovementService};
//!
//! let db = Database::new(DbConfig::new("stockroom.db")).await?;
//!
//! let recent = db.products().list_recent(10).await?;
//!
//! let movements = MovementService::new(db.clone());
//! let movement = movements
//!     .apply_movement(1, &MovementRequest::new("Venta", 3))
//!     .await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;
pub mod service;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult, ErrorKind, InventoryError, InventoryResult};
pub use pool::{Database, DbConfig};
pub use service::MovementService;

// Repository re-exports for convenience
pub use repository::movement::{MovementRecord, MovementRepository};
pub use repository::product::ProductRepository;

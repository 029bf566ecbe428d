//! # Database Error Types
//!
//! Error types for database operations and for the inventory operations
//! built on top of them.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  SQLite Error (sqlx::Error)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbError ← Adds context and categorization                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  InventoryError ← Validation | NotFound | Storage (closed set)          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in HTTP app) ← 400 | 404 | 500                              │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use stockroom_core::{CoreError, ValidationError};
use thiserror::Error;

// =============================================================================
// Database Error
// =============================================================================

/// Database operation errors.
///
/// These errors wrap sqlx errors and provide additional context
/// for debugging and logging.
#[derive(Debug, Error)]
pub enum DbError {
    /// CHECK / NOT NULL / UNIQUE constraint violation.
    #[error("Constraint violation: {message}")]
    ConstraintViolation { message: String },

    /// Database connection failed.
    ///
    /// ## When This Occurs
    /// - Database file can't be created or opened
    /// - Pool has been closed during shutdown
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration failed.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// Query execution failed.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// A step of a multi-statement transaction failed.
    ///
    /// `stage` names the step (`begin`, `insert movement`, `update stock`,
    /// `commit`) so logs point at the statement that broke.
    #[error("Transaction failed during {stage}: {cause}")]
    TransactionFailed { stage: &'static str, cause: String },

    /// Pool exhausted (all connections in use until the acquire timeout).
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Internal database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

impl DbError {
    /// Creates a TransactionFailed error for the given stage.
    pub fn transaction(stage: &'static str, cause: impl fmt::Display) -> Self {
        DbError::TransactionFailed {
            stage,
            cause: cause.to_string(),
        }
    }
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::Database       → Analyze message for constraint type
/// sqlx::Error::PoolTimedOut   → DbError::PoolExhausted
/// sqlx::Error::PoolClosed     → DbError::ConnectionFailed
/// Other                       → DbError::Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => {
                let msg = db_err.message();

                // SQLite reports "<KIND> constraint failed: <table>.<column>"
                if msg.contains("constraint failed") {
                    DbError::ConstraintViolation {
                        message: msg.to_string(),
                    }
                } else {
                    DbError::QueryFailed(msg.to_string())
                }
            }

            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,

            sqlx::Error::PoolClosed => DbError::ConnectionFailed("Pool is closed".to_string()),

            _ => DbError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;

// =============================================================================
// Inventory Error
// =============================================================================

/// The closed set of failure categories an inventory operation can report.
///
/// ```text
/// Validation → 400   client input or business rule
/// NotFound   → 404   referenced product is absent
/// Storage    → 500   query / transaction failure
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Storage,
}

/// Errors returned by repositories and the movement service.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// Malformed input or violated business rule.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A sale asked for more units than are on hand.
    #[error("Stock insuficiente")]
    InsufficientStock {
        product_id: i64,
        available: i64,
        requested: i64,
    },

    /// Referenced entity does not exist.
    #[error("{entity} no encontrado")]
    NotFound { entity: &'static str, id: i64 },

    /// The storage layer failed.
    #[error(transparent)]
    Storage(#[from] DbError),
}

impl InventoryError {
    /// Creates a NotFound error for a product id.
    pub fn product_not_found(id: i64) -> Self {
        InventoryError::NotFound {
            entity: "Producto",
            id,
        }
    }

    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            InventoryError::Validation(_) | InventoryError::InsufficientStock { .. } => {
                ErrorKind::Validation
            }
            InventoryError::NotFound { .. } => ErrorKind::NotFound,
            InventoryError::Storage(_) => ErrorKind::Storage,
        }
    }
}

impl From<CoreError> for InventoryError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InsufficientStock {
                product_id,
                available,
                requested,
            } => InventoryError::InsufficientStock {
                product_id,
                available,
                requested,
            },
            CoreError::Validation(e) => InventoryError::Validation(e),
        }
    }
}

impl From<sqlx::Error> for InventoryError {
    fn from(err: sqlx::Error) -> Self {
        InventoryError::Storage(err.into())
    }
}

/// Result type for inventory operations.
pub type InventoryResult<T> = Result<T, InventoryError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        assert_eq!(
            InventoryError::from(ValidationError::MissingFields).kind(),
            ErrorKind::Validation
        );
        assert_eq!(
            InventoryError::from(CoreError::InsufficientStock {
                product_id: 1,
                available: 2,
                requested: 5,
            })
            .kind(),
            ErrorKind::Validation
        );
        assert_eq!(
            InventoryError::product_not_found(3).kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            InventoryError::from(DbError::PoolExhausted).kind(),
            ErrorKind::Storage
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            InventoryError::product_not_found(3).to_string(),
            "Producto no encontrado"
        );
        assert_eq!(
            InventoryError::from(ValidationError::QuantityNotPositive).to_string(),
            "La cantidad debe ser un número positivo"
        );
        assert_eq!(
            DbError::transaction("update stock", "disk I/O error").to_string(),
            "Transaction failed during update stock: disk I/O error"
        );
    }

    #[test]
    fn test_pool_errors_map() {
        assert!(matches!(
            DbError::from(sqlx::Error::PoolTimedOut),
            DbError::PoolExhausted
        ));
        assert!(matches!(
            DbError::from(sqlx::Error::PoolClosed),
            DbError::ConnectionFailed(_)
        ));
    }
}

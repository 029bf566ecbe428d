//! # Error Types
//!
//! Domain-specific error types for stockroom-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  stockroom-core errors (this file)                                     │
//! │  ├── CoreError        - Business rule violations                       │
//! │  └── ValidationError  - Malformed client input                         │
//! │                                                                         │
//! │  stockroom-db errors (separate crate)                                  │
//! │  ├── DbError          - Database operation failures                    │
//! │  └── InventoryError   - Validation | NotFound | Storage                │
//! │                                                                         │
//! │  HTTP errors (in app)                                                  │
//! │  └── ApiError         - { ok: false, message | error }                 │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → InventoryError → ApiError         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Messages
//! The `Display` text of every variant is the message clients receive in
//! the `message` field of an error response, so it stays stable.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Business rule violations raised while planning a stock change.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A sale asks for more units than the product has on hand.
    ///
    /// ## User Workflow
    /// ```text
    /// POST /movement/1 { type: "Venta", quantity: 5 }
    ///      │
    ///      ▼
    /// Check stock: available=2
    ///      │
    ///      ▼
    /// InsufficientStock { product_id: 1, available: 2, requested: 5 }
    ///      │
    ///      ▼
    /// 400 { ok: false, message: "Stock insuficiente" }
    /// ```
    #[error("Stock insuficiente")]
    InsufficientStock {
        product_id: i64,
        available: i64,
        requested: i64,
    },

    /// Validation error (wraps ValidationError).
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when client input doesn't meet requirements and are
/// always detected before anything is written.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// `type` or `quantity` is missing from a movement request.
    #[error("Faltan datos requeridos")]
    MissingFields,

    /// Product name is missing or blank.
    #[error("El campo Nombre del producto es obligatorio")]
    ProductNameRequired,

    /// Product name is longer than allowed.
    #[error("El nombre del producto no puede superar {max} caracteres")]
    ProductNameTooLong { max: usize },

    /// Price is negative or not a finite number.
    #[error("El precio debe ser un número mayor o igual a cero")]
    InvalidPrice,

    /// Quantity is zero, negative, or not an integer.
    #[error("La cantidad debe ser un número positivo")]
    QuantityNotPositive,

    /// Applying the quantity would overflow the stock counter.
    #[error("La cantidad excede el máximo permitido")]
    QuantityOutOfRange,

    /// Movement type is not one of the known kinds.
    #[error("Tipo de movimiento inválido")]
    InvalidMovementType(String),

    /// A path identifier is not an integer.
    #[error("Identificador inválido: {0}")]
    InvalidId(String),

    /// Request body is not valid JSON for the expected shape.
    #[error("Cuerpo de la solicitud inválido: {0}")]
    MalformedBody(String),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

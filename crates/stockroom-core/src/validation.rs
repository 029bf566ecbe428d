//! # Validation Module
//!
//! Input validation utilities for Stockroom.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP handler                                                 │
//! │  ├── JSON shape (deserialization into request DTOs)                    │
//! │  └── Path identifiers                                                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Required fields, names, prices                                    │
//! │  └── Movement quantity                                                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL / CHECK constraints                                      │
//! │  └── Conditional stock update (never below zero)                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use serde_json::json;
//! use stockroom_core::validation::{parse_quantity, validate_product_name};
//!
//! assert!(validate_product_name("Yerba 1kg").is_ok());
//! assert_eq!(parse_quantity(&json!("3")), Ok(3));
//! assert!(parse_quantity(&json!(-1)).is_err());
//! ```

use serde_json::Value;

use crate::error::ValidationError;
use crate::types::{MovementKind, MovementRequest};
use crate::MAX_PRODUCT_NAME_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Product Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty or whitespace
/// - Must be at most `MAX_PRODUCT_NAME_LEN` characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::ProductNameRequired);
    }

    if name.chars().count() > MAX_PRODUCT_NAME_LEN {
        return Err(ValidationError::ProductNameTooLong {
            max: MAX_PRODUCT_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates an optional price.
///
/// Absent prices are allowed. Present prices must be finite and >= 0.
pub fn validate_price(price: Option<f64>) -> ValidationResult<()> {
    match price {
        Some(p) if !p.is_finite() || p < 0.0 => Err(ValidationError::InvalidPrice),
        _ => Ok(()),
    }
}

/// Parses a path identifier.
pub fn parse_id(raw: &str) -> ValidationResult<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::InvalidId(raw.to_string()))
}

// =============================================================================
// Movement Validators
// =============================================================================

/// Checks that a movement request carries both `type` and `quantity`.
///
/// `null`, absent, and blank-string values count as missing. The returned
/// references are still unparsed.
pub fn require_movement_fields(request: &MovementRequest) -> ValidationResult<(&Value, &Value)> {
    Ok((present(&request.kind)?, present(&request.quantity)?))
}

fn present(field: &Option<Value>) -> ValidationResult<&Value> {
    match field {
        None | Some(Value::Null) => Err(ValidationError::MissingFields),
        Some(Value::String(s)) if s.trim().is_empty() => Err(ValidationError::MissingFields),
        Some(value) => Ok(value),
    }
}

/// Parses a movement type label.
///
/// The label must be exactly `"Compra"` or `"Venta"`: no trimming, no case
/// folding. Non-string values are invalid types.
pub fn parse_movement_kind(value: &Value) -> ValidationResult<MovementKind> {
    match value {
        Value::String(label) => label.parse(),
        other => Err(ValidationError::InvalidMovementType(other.to_string())),
    }
}

/// Parses a movement quantity into a positive integer.
///
/// ## Accepted Forms
/// - JSON integers: `3`
/// - Integral JSON floats: `3.0`
/// - Strings holding an integer: `"3"`
///
/// Anything else, or any value <= 0, is rejected.
pub fn parse_quantity(value: &Value) -> ValidationResult<i64> {
    let quantity = match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    match quantity {
        Some(q) if q > 0 => Ok(q),
        _ => Err(ValidationError::QuantityNotPositive),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

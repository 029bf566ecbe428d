//! # Domain Types
//!
//! Core domain types used throughout Stockroom.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    Movement     │   │  MovementKind   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (i64)       │◄──│  product_id     │   │  Purchase       │       │
//! │  │  name           │   │  type           │──►│   ("Compra")    │       │
//! │  │  price?         │   │  quantity       │   │  Sale           │       │
//! │  │  stock          │   │  new_stock      │   │   ("Venta")     │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  Request DTOs: CreateProductRequest, MovementRequest                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Identifiers are integers assigned by storage on insert.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::validation;

// =============================================================================
// Product
// =============================================================================

/// A product with its on-hand stock counter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Storage-assigned identifier.
    pub id: i64,

    /// Display name.
    pub name: String,

    /// Optional unit price.
    pub price: Option<f64>,

    /// Units on hand. The single source of truth for inventory.
    pub stock: i64,
}

/// A validated product ready to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: Option<f64>,
}

impl NewProduct {
    /// Builds a product from a trimmed name and an optional price.
    pub fn new(name: impl Into<String>, price: Option<f64>) -> Self {
        NewProduct {
            name: name.into().trim().to_string(),
            price,
        }
    }
}

/// Body of `POST /api/v1/products`.
///
/// All fields are optional at the wire level so a missing name surfaces as
/// a validation error instead of a deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CreateProductRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
}

impl CreateProductRequest {
    /// Validates the request and converts it into a [`NewProduct`].
    pub fn into_new_product(self) -> Result<NewProduct, ValidationError> {
        let name = self.name.ok_or(ValidationError::ProductNameRequired)?;
        validation::validate_product_name(&name)?;
        validation::validate_price(self.price)?;
        Ok(NewProduct::new(name, self.price))
    }
}

// =============================================================================
// Movement Kind
// =============================================================================

/// The direction of a stock movement.
///
/// Wire and storage values are the Spanish labels `"Compra"` and `"Venta"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
pub enum MovementKind {
    /// Stock comes in.
    #[serde(rename = "Compra")]
    #[cfg_attr(feature = "sqlx", sqlx(rename = "Compra"))]
    Purchase,
    /// Stock goes out.
    #[serde(rename = "Venta")]
    #[cfg_attr(feature = "sqlx", sqlx(rename = "Venta"))]
    Sale,
}

impl MovementKind {
    /// Returns the wire label.
    pub const fn as_str(&self) -> &'static str {
        match self {
            MovementKind::Purchase => "Compra",
            MovementKind::Sale => "Venta",
        }
    }

    /// Signed stock delta for `quantity` units of this kind.
    pub const fn signed(&self, quantity: i64) -> i64 {
        match self {
            MovementKind::Purchase => quantity,
            MovementKind::Sale => -quantity,
        }
    }
}

impl fmt::Display for MovementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MovementKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Compra" => Ok(MovementKind::Purchase),
            "Venta" => Ok(MovementKind::Sale),
            other => Err(ValidationError::InvalidMovementType(other.to_string())),
        }
    }
}

// =============================================================================
// Movement
// =============================================================================

/// A recorded stock movement together with the stock it produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movement {
    pub id: i64,
    pub product_id: i64,
    #[serde(rename = "type")]
    pub kind: MovementKind,
    pub quantity: i64,
    /// Product stock right after this movement was applied.
    pub new_stock: i64,
}

/// Body of `POST /api/v1/products/movement/{productId}`.
///
/// Fields are kept raw: the movement service checks them in a fixed order
/// (presence, product existence, quantity, type) so each failure maps to
/// its own error. A `type` of the wrong JSON type is still a type error,
/// not a malformed body.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MovementRequest {
    #[serde(rename = "type", default)]
    pub kind: Option<Value>,
    #[serde(default)]
    pub quantity: Option<Value>,
}

impl MovementRequest {
    /// Builds a request from a kind label and a quantity.
    pub fn new(kind: impl Into<String>, quantity: impl Into<Value>) -> Self {
        MovementRequest {
            kind: Some(Value::String(kind.into())),
            quantity: Some(quantity.into()),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

//! # Stock Arithmetic
//!
//! Computes the effect of a movement on a product's stock without touching
//! storage. The database layer persists the plan inside a transaction.
//!
//! ## Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Purchase ("Compra")  new_stock = stock + quantity                      │
//! │  Sale     ("Venta")   stock < quantity → InsufficientStock              │
//! │                       otherwise new_stock = stock - quantity            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::{MovementKind, Product};

/// A validated, not yet persisted, change to a product's stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockChange {
    pub product_id: i64,
    pub kind: MovementKind,
    pub quantity: i64,
    pub previous_stock: i64,
    pub new_stock: i64,
}

impl StockChange {
    /// Signed amount added to the stock counter.
    #[inline]
    pub fn delta(&self) -> i64 {
        self.kind.signed(self.quantity)
    }
}

/// Computes the stock a product would have after a movement.
///
/// ## Errors
/// - `QuantityNotPositive` if `quantity <= 0`
/// - `InsufficientStock` if a sale exceeds the stock on hand
/// - `QuantityOutOfRange` if a purchase would overflow the counter
pub fn next_stock(product_id: i64, current: i64, kind: MovementKind, quantity: i64) -> CoreResult<i64> {
    if quantity <= 0 {
        return Err(ValidationError::QuantityNotPositive.into());
    }

    match kind {
        MovementKind::Purchase => current
            .checked_add(quantity)
            .ok_or_else(|| ValidationError::QuantityOutOfRange.into()),
        MovementKind::Sale => {
            if current < quantity {
                return Err(CoreError::InsufficientStock {
                    product_id,
                    available: current,
                    requested: quantity,
                });
            }
            Ok(current - quantity)
        }
    }
}

/// Plans a movement against a product snapshot.
pub fn plan_movement(product: &Product, kind: MovementKind, quantity: i64) -> CoreResult<StockChange> {
    let new_stock = next_stock(product.id, product.stock, kind, quantity)?;

    Ok(StockChange {
        product_id: product.id,
        kind,
        quantity,
        previous_stock: product.stock,
        new_stock,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

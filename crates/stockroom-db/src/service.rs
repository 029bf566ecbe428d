//! # Movement Service
//!
//! Applies stock movements: validates the request, then records the ledger
//! row and the stock change in one transaction.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    apply_movement(product_id, request)                  │
//! │                                                                         │
//! │  1. type + quantity present?          no → Validation (400)            │
//! │  2. product exists?                   no → NotFound   (404)            │
//! │  3. quantity positive integer?        no → Validation (400)            │
//! │  4. type is Compra | Venta?           no → Validation (400)            │
//! │  5. plan_movement (stock rules)       short sale → Validation (400)    │
//! │       │                                                                 │
//! │       ▼  nothing written so far                                         │
//! │  ┌─────────────── BEGIN ───────────────┐                               │
//! │  │ INSERT INTO movements ...           │                               │
//! │  │ UPDATE products SET stock = ...     │ ← conditional, RETURNING      │
//! │  └───── COMMIT  (ROLLBACK on error) ───┘                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Movement { id, product_id, type, quantity, new_stock }                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::{Sqlite, Transaction};
use tracing::{error, info, warn};

use crate::error::{DbError, InventoryError, InventoryResult};
use crate::pool::Database;
use crate::repository::movement::MovementRepository;
use crate::repository::product::ProductRepository;
use stockroom_core::stock::plan_movement;
use stockroom_core::validation::{parse_movement_kind, parse_quantity, require_movement_fields};
use stockroom_core::{Movement, MovementRequest, StockChange};

/// Records purchases and sales against product stock.
#[derive(Debug, Clone)]
pub struct MovementService {
    db: Database,
}

impl MovementService {
    /// Creates a service on top of a database handle.
    pub fn new(db: Database) -> Self {
        MovementService { db }
    }

    /// Validates and applies a movement to a product.
    ///
    /// ## Errors
    /// - `Validation` for missing fields, a bad quantity, an unknown type
    ///   or insufficient stock
    /// - `NotFound` when the product does not exist
    /// - `Storage` when the transaction fails (nothing is persisted)
    pub async fn apply_movement(
        &self,
        product_id: i64,
        request: &MovementRequest,
    ) -> InventoryResult<Movement> {
        let (raw_kind, raw_quantity) = require_movement_fields(request)?;

        let product = self
            .db
            .products()
            .get_by_id(product_id)
            .await?
            .ok_or_else(|| InventoryError::product_not_found(product_id))?;

        let quantity = parse_quantity(raw_quantity)?;
        let kind = parse_movement_kind(raw_kind)?;
        let change = plan_movement(&product, kind, quantity)?;

        let mut tx = self.db.begin().await?;

        match Self::record(&mut tx, &change).await {
            Ok(movement) => {
                tx.commit()
                    .await
                    .map_err(|e| DbError::transaction("commit", e))?;

                info!(
                    movement_id = movement.id,
                    product_id = movement.product_id,
                    kind = %movement.kind,
                    quantity = movement.quantity,
                    new_stock = movement.new_stock,
                    "Movement applied"
                );
                Ok(movement)
            }
            Err(err) => {
                match &err {
                    InventoryError::Storage(cause) => {
                        error!(product_id, error = %cause, "Movement rolled back")
                    }
                    other => warn!(product_id, reason = %other, "Movement rolled back"),
                }

                if let Err(rollback_err) = tx.rollback().await {
                    error!(product_id, error = %rollback_err, "Rollback failed");
                }
                Err(err)
            }
        }
    }

    /// Inserts the ledger row and applies the stock delta on `tx`.
    async fn record(
        tx: &mut Transaction<'static, Sqlite>,
        change: &StockChange,
    ) -> InventoryResult<Movement> {
        let movement_id =
            MovementRepository::insert_in(&mut **tx, change.product_id, change.kind, change.quantity)
                .await
                .map_err(|e| DbError::transaction("insert movement", e))?;

        let updated = ProductRepository::adjust_stock_in(&mut **tx, change.product_id, change.delta())
            .await
            .map_err(|e| DbError::transaction("update stock", e))?;

        let new_stock = match updated {
            Some(stock) => stock,
            // Stock drained or product removed since the lookup
            None => {
                let available = ProductRepository::stock_in(&mut **tx, change.product_id)
                    .await
                    .map_err(|e| DbError::transaction("update stock", e))?;

                return Err(match available {
                    Some(available) => InventoryError::InsufficientStock {
                        product_id: change.product_id,
                        available,
                        requested: change.quantity,
                    },
                    None => InventoryError::product_not_found(change.product_id),
                });
            }
        };

        Ok(Movement {
            id: movement_id,
            product_id: change.product_id,
            kind: change.kind,
            quantity: change.quantity,
            new_stock,
        })
    }

    /// Deletes a movement row. Product stock is left unchanged.
    ///
    /// Deleting an id that does not exist succeeds.
    pub async fn delete_movement(&self, id: i64) -> InventoryResult<()> {
        let removed = self.db.movements().delete_by_id(id).await?;

        if removed == 0 {
            info!(movement_id = id, "Movement delete matched no row");
        } else {
            info!(movement_id = id, "Movement deleted");
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

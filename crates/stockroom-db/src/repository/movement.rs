//! # Movement Repository
//!
//! Database operations for the movement ledger.
//!
//! Inserts always run inside the caller's transaction together with the
//! matching stock update. Deleting a row does not touch product stock.

use chrono::{DateTime, Utc};
use sqlx::{SqliteConnection, SqlitePool};
use tracing::debug;

use crate::error::DbResult;
use stockroom_core::MovementKind;

/// A stored movement row.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct MovementRecord {
    pub id: i64,
    pub product_id: i64,
    #[sqlx(rename = "type")]
    pub kind: MovementKind,
    pub quantity: i64,
    pub created_at: DateTime<Utc>,
}

/// Repository for movement database operations.
#[derive(Debug, Clone)]
pub struct MovementRepository {
    pool: SqlitePool,
}

impl MovementRepository {
    /// Creates a new MovementRepository.
    pub fn new(pool: SqlitePool) -> Self {
        MovementRepository { pool }
    }

    /// Appends a movement row on the given connection.
    ///
    /// ## Returns
    /// The storage-assigned movement id.
    pub async fn insert_in(
        conn: &mut SqliteConnection,
        product_id: i64,
        kind: MovementKind,
        quantity: i64,
    ) -> DbResult<i64> {
        debug!(product_id = %product_id, kind = %kind, quantity = %quantity, "Inserting movement");

        let result = sqlx::query(
            r#"
            INSERT INTO movements (product_id, type, quantity, created_at)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(product_id)
        .bind(kind.as_str())
        .bind(quantity)
        .bind(Utc::now())
        .execute(conn)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Gets a movement by its ID.
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<MovementRecord>> {
        let record = sqlx::query_as::<_, MovementRecord>(
            r#"
            SELECT id, product_id, type, quantity, created_at
            FROM movements
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    /// Lists movements for a product, oldest first.
    pub async fn list_for_product(&self, product_id: i64) -> DbResult<Vec<MovementRecord>> {
        let records = sqlx::query_as::<_, MovementRecord>(
            r#"
            SELECT id, product_id, type, quantity, created_at
            FROM movements
            WHERE product_id = ?1
            ORDER BY id
            "#,
        )
        .bind(product_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    /// Counts movements recorded for a product.
    pub async fn count_for_product(&self, product_id: i64) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM movements WHERE product_id = ?1")
            .bind(product_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Hard-deletes a movement row.
    ///
    /// ## Returns
    /// Number of rows removed (0 when the id did not exist).
    pub async fn delete_by_id(&self, id: i64) -> DbResult<u64> {
        debug!(id = %id, "Deleting movement");

        let result = sqlx::query("DELETE FROM movements WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

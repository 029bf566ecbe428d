//! # Product Repository
//!
//! Database operations for products.
//!
//! ## Key Operations
//! - Recent product listing
//! - Create / lookup / hard delete
//! - Conditional stock updates inside a movement transaction
//!
//! ## Stock Delta Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Stock Update Strategy                                │
//! │                                                                         │
//! │  ❌ WRONG: read stock, compute in Rust, write absolute value           │
//! │     UPDATE products SET stock = 7 WHERE id = ?                          │
//! │     (two concurrent sales both read 10 and both write 7)               │
//! │                                                                         │
//! │  ✅ CORRECT: conditional delta                                         │
//! │     UPDATE products SET stock = stock - 3                              │
//! │     WHERE id = ? AND stock - 3 >= 0 RETURNING stock                    │
//! │                                                                         │
//! │  No row returned → product missing or stock would go negative          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A NULL stock column is read as 0 everywhere.

use sqlx::{SqliteConnection, SqlitePool};
use tracing::debug;

use crate::error::DbResult;
use stockroom_core::{NewProduct, Product};

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ProductRepository::new(pool);
///
/// let recent = repo.list_recent(10).await?;
/// let product = repo.get_by_id(42).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Lists the most recently created products, newest first.
    pub async fn list_recent(&self, limit: u32) -> DbResult<Vec<Product>> {
        debug!(limit = %limit, "Listing recent products");

        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, price, COALESCE(stock, 0) AS stock
            FROM products
            ORDER BY id DESC
            LIMIT ?1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    /// Inserts a new product with zero stock.
    ///
    /// ## Returns
    /// The stored row, including its assigned id.
    pub async fn create(&self, product: &NewProduct) -> DbResult<Product> {
        debug!(name = %product.name, "Inserting product");

        let created = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (name, price, stock)
            VALUES (?1, ?2, 0)
            RETURNING id, name, price, COALESCE(stock, 0) AS stock
            "#,
        )
        .bind(&product.name)
        .bind(product.price)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// Gets a product by its ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - Product not found
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, price, COALESCE(stock, 0) AS stock
            FROM products
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Hard-deletes a product.
    ///
    /// Movements referencing the product are left in place.
    ///
    /// ## Returns
    /// Number of rows removed (0 when the id did not exist).
    pub async fn delete_by_id(&self, id: i64) -> DbResult<u64> {
        debug!(id = %id, "Deleting product");

        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Counts total products (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Applies `delta` to a product's stock if the result stays non-negative.
    ///
    /// ## Returns
    /// * `Ok(Some(new_stock))` - Row updated
    /// * `Ok(None)` - Product missing, or the delta would make stock negative
    pub async fn adjust_stock_in(
        conn: &mut SqliteConnection,
        id: i64,
        delta: i64,
    ) -> DbResult<Option<i64>> {
        debug!(id = %id, delta = %delta, "Adjusting stock");

        let new_stock: Option<i64> = sqlx::query_scalar(
            r#"
            UPDATE products
            SET stock = COALESCE(stock, 0) + ?1
            WHERE id = ?2 AND COALESCE(stock, 0) + ?1 >= 0
            RETURNING stock
            "#,
        )
        .bind(delta)
        .bind(id)
        .fetch_optional(conn)
        .await?;

        Ok(new_stock)
    }

    /// Reads a product's stock on the given connection.
    ///
    /// Returns `None` when the product does not exist.
    pub async fn stock_in(conn: &mut SqliteConnection, id: i64) -> DbResult<Option<i64>> {
        let stock: Option<i64> =
            sqlx::query_scalar("SELECT COALESCE(stock, 0) FROM products WHERE id = ?1")
                .bind(id)
                .fetch_optional(conn)
                .await?;

        Ok(stock)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

//! # Product Handlers
//!
//! Listing, creation and deletion of products.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use tracing::info;

use stockroom_core::validation::parse_id;
use stockroom_core::{CreateProductRequest, Product, RECENT_PRODUCTS_LIMIT};

use super::{parse_body, OkResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// Product as returned after creation.
#[derive(Debug, Clone, Serialize)]
pub struct ProductSummary {
    pub id: i64,
    pub name: String,
    pub price: Option<f64>,
}

impl From<Product> for ProductSummary {
    fn from(p: Product) -> Self {
        ProductSummary {
            id: p.id,
            name: p.name,
            price: p.price,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProductListResponse {
    pub ok: bool,
    pub products: Vec<Product>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct ProductCreatedResponse {
    pub ok: bool,
    pub product: ProductSummary,
}

/// `GET /api/v1/products`
///
/// The most recent products, newest first.
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<ProductListResponse>, ApiError> {
    let products = state
        .db
        .products()
        .list_recent(RECENT_PRODUCTS_LIMIT)
        .await
        .map_err(|e| state.reject(e))?;

    Ok(Json(ProductListResponse {
        ok: true,
        count: products.len(),
        products,
    }))
}

/// `POST /api/v1/products`
pub async fn create_product(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<ProductCreatedResponse>), ApiError> {
    let request: CreateProductRequest = parse_body(&body)?;
    let new_product = request.into_new_product()?;

    let product = state
        .db
        .products()
        .create(&new_product)
        .await
        .map_err(|e| state.reject(e))?;

    info!(product_id = product.id, name = %product.name, "Product created");

    Ok((
        StatusCode::CREATED,
        Json(ProductCreatedResponse {
            ok: true,
            product: product.into(),
        }),
    ))
}

/// `DELETE /api/v1/products/{id}`
///
/// Succeeds whether or not the product existed.
pub async fn delete_product(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<OkResponse>, ApiError> {
    let id = parse_id(&raw_id)?;

    let removed = state
        .db
        .products()
        .delete_by_id(id)
        .await
        .map_err(|e| state.reject(e))?;

    info!(product_id = id, removed, "Product delete");

    Ok(Json(OkResponse::new()))
}

//! # Movement Handlers
//!
//! Thin wrappers over [`MovementService`](stockroom_db::MovementService).
//!
//! A non-numeric product id on `POST /movement/{id}` can never match a
//! product, so it answers 404 (after the required-fields check, like any
//! other unknown product).

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use tracing::debug;

use stockroom_core::validation::{parse_id, require_movement_fields};
use stockroom_core::{Movement, MovementRequest};
use stockroom_db::InventoryError;

use super::{parse_body, OkResponse};
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct MovementCreatedResponse {
    pub ok: bool,
    pub movement: Movement,
}

/// `POST /api/v1/products/movement/{productId}`
pub async fn create_movement(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> Result<(StatusCode, Json<MovementCreatedResponse>), ApiError> {
    let request: MovementRequest = parse_body(&body)?;

    let product_id = match parse_id(&raw_id) {
        Ok(id) => id,
        Err(_) => {
            debug!(raw_id = %raw_id, "Non-numeric product id");
            require_movement_fields(&request)?;
            return Err(state.reject(InventoryError::product_not_found(0)));
        }
    };

    let movement = state
        .movements
        .apply_movement(product_id, &request)
        .await
        .map_err(|e| state.reject(e))?;

    Ok((
        StatusCode::CREATED,
        Json(MovementCreatedResponse { ok: true, movement }),
    ))
}

/// `DELETE /api/v1/products/movement/{id}`
///
/// Removes the ledger row only; product stock is not adjusted.
pub async fn delete_movement(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<OkResponse>, ApiError> {
    let id = parse_id(&raw_id)?;

    state
        .movements
        .delete_movement(id)
        .await
        .map_err(|e| state.reject(e))?;

    Ok(Json(OkResponse::new()))
}

//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Stockroom                              │
//! │                                                                         │
//! │  Handler                                                                │
//! │  Result<T, ApiError>                                                    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  InventoryError::kind()                                                 │
//! │    Validation ──► 400  { "ok": false, "message": "Stock insuficiente" } │
//! │    NotFound   ──► 404  { "ok": false, "message": "Producto no ..." }    │
//! │    Storage    ──► 500  { "ok": false, "error": "Error interno ..." }    │
//! │                        (cause logged; in body only when exposed)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::error;

use stockroom_core::ValidationError;
use stockroom_db::{ErrorKind, InventoryError};

/// Body text of a 500 response when storage causes are hidden.
pub const INTERNAL_ERROR_MESSAGE: &str = "Error interno del servidor";

/// Error returned from HTTP handlers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// 400 with a client-facing message.
    #[error("{0}")]
    BadRequest(String),

    /// 404 with a client-facing message.
    #[error("{0}")]
    NotFound(String),

    /// 500 with a generic (or exposed) message.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Maps an inventory error to its HTTP form.
    ///
    /// Storage failures are always logged with their cause; the cause only
    /// reaches the client when `expose_storage_errors` is set.
    pub fn from_inventory(err: InventoryError, expose_storage_errors: bool) -> Self {
        match err.kind() {
            ErrorKind::Validation => ApiError::BadRequest(err.to_string()),
            ErrorKind::NotFound => ApiError::NotFound(err.to_string()),
            ErrorKind::Storage => {
                error!(error = %err, "Storage failure");
                if expose_storage_errors {
                    ApiError::Internal(format!("{INTERNAL_ERROR_MESSAGE}: {err}"))
                } else {
                    ApiError::Internal(INTERNAL_ERROR_MESSAGE.to_string())
                }
            }
        }
    }

    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

#[derive(Serialize)]
struct MessageBody<'a> {
    ok: bool,
    message: &'a str,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    ok: bool,
    error: &'a str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::BadRequest(message) | ApiError::NotFound(message) => (
                status,
                Json(MessageBody { ok: false, message }),
            )
                .into_response(),
            ApiError::Internal(error) => {
                (status, Json(ErrorBody { ok: false, error })).into_response()
            }
        }
    }
}

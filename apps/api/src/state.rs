//! Shared application state.

use stockroom_db::{Database, InventoryError, MovementService};

use crate::error::ApiError;

/// State handed to every handler.
///
/// Everything inside is a pool handle, so cloning per request is cheap.
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: Database,
    pub movements: MovementService,
    pub expose_storage_errors: bool,
}

impl AppState {
    pub fn new(db: Database, expose_storage_errors: bool) -> Self {
        AppState {
            movements: MovementService::new(db.clone()),
            db,
            expose_storage_errors,
        }
    }

    /// Converts an inventory error using this server's exposure setting.
    pub fn reject(&self, err: impl Into<InventoryError>) -> ApiError {
        ApiError::from_inventory(err.into(), self.expose_storage_errors)
    }
}

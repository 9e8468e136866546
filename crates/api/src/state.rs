use std::sync::Arc;

use atal_core::error::CoreError;
use atal_db::{DocumentStore, DynStore};

use crate::config::ServerConfig;
use crate::error::AppError;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: everything inside is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Document store handle. `None` when the store could not be
    /// initialized; store-backed endpoints then answer 503.
    pub store: Option<DynStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Borrow the document store, or fail with `BackendUnavailable`.
    pub fn store(&self) -> Result<&dyn DocumentStore, AppError> {
        self.store.as_deref().ok_or_else(|| {
            AppError::Core(CoreError::BackendUnavailable(
                "Document store is not available".into(),
            ))
        })
    }
}

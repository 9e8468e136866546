//! Startup phase: document store initialization and catalog seeding.
//!
//! Neither step can abort the process. A store that cannot be reached
//! leaves the server in degraded mode (no store handle), and a failed seed
//! is only logged.

use std::sync::Arc;

use atal_db::firestore::{FirestoreStore, ServiceAccount};
use atal_db::memory::MemoryStore;
use atal_db::seed::seed_default_components;
use atal_db::{DocumentStore, DynStore, StoreError};

use crate::config::StoreBackend;

/// Create the document store for the configured backend.
///
/// Returns `None` when the backend is disabled or initialization fails.
pub async fn connect_store(backend: StoreBackend) -> Option<DynStore> {
    match backend {
        StoreBackend::Disabled => {
            tracing::warn!("Document store disabled, serving the default catalog only");
            None
        }
        StoreBackend::Memory => {
            tracing::info!("Using in-memory document store");
            Some(Arc::new(MemoryStore::new()))
        }
        StoreBackend::Firestore => match connect_firestore().await {
            Ok(store) => Some(store),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    "Document store initialization failed, running without it"
                );
                None
            }
        },
    }
}

async fn connect_firestore() -> Result<DynStore, StoreError> {
    let account = ServiceAccount::from_env()?;
    let store = FirestoreStore::new(&account)?;
    store.ping().await?;
    tracing::info!(project_id = %account.project_id, database = %account.database, "Connected to Firestore");
    Ok(Arc::new(store))
}

/// Seed the default component catalog, logging instead of failing.
pub async fn seed_store(store: &dyn DocumentStore) {
    match seed_default_components(store).await {
        Ok(0) => tracing::info!("Component catalog already populated"),
        Ok(count) => tracing::info!(count, "Default components added"),
        Err(e) => tracing::error!(error = %e, "Error initializing default data"),
    }
}

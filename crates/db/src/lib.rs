//! Document store adapter and persistence for the idea generator API.
//!
//! The [`DocumentStore`] trait is the only seam to the backing database.
//! Repositories translate between typed models and schemaless documents;
//! [`seed`] owns the default component catalog.

pub mod firestore;
pub mod memory;
pub mod models;
pub mod repositories;
pub mod seed;
pub mod store;

pub use store::{Document, DocumentStore, DynStore, Query, StoreError};

/// Collection names used by the repositories.
pub mod collections {
    pub const COMPONENTS: &str = "components";
    pub const PROJECTS: &str = "projects";
    pub const USERS: &str = "users";
}

/// Check that the store answers.
pub async fn health_check(store: &dyn DocumentStore) -> Result<(), StoreError> {
    store.ping().await
}

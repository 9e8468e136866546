//! Repositories: typed CRUD over the document store.

pub mod component_repo;
pub mod project_repo;
pub mod user_repo;

pub use component_repo::ComponentRepo;
pub use project_repo::ProjectRepo;
pub use user_repo::UserRepo;

use serde::de::DeserializeOwned;

use crate::models::from_document;
use crate::store::{Document, StoreError};

/// Decode query results into typed entities.
fn decode_all<T: DeserializeOwned>(rows: Vec<(String, Document)>) -> Result<Vec<T>, StoreError> {
    rows.into_iter()
        .map(|(id, doc)| from_document(id, doc))
        .collect()
}

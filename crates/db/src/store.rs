//! The document store abstraction.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};

/// A schemaless record: a JSON object keyed by field name.
pub type Document = Map<String, Value>;

/// Shared handle to a store implementation.
pub type DynStore = Arc<dyn DocumentStore>;

/// Errors raised by a [`DocumentStore`] implementation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No usable store handle (never configured, or initialization failed).
    #[error("Document store unavailable: {0}")]
    Unavailable(String),

    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("Document store request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The store answered with a non-success status.
    #[error("Document store returned HTTP {status}: {body}")]
    Api { status: u16, body: String },

    /// Credentials were rejected or could not be used to sign a token.
    #[error("Document store authentication failed: {0}")]
    Auth(String),

    /// A document could not be converted to or from its typed model.
    #[error("Document codec error: {0}")]
    Codec(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Codec(err.to_string())
    }
}

/// Equality-filtered, optionally limited scan of one collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    /// Top-level `field == value` filters, AND-composed.
    pub filters: Vec<(String, Value)>,
    pub limit: Option<usize>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a `field == value` filter.
    pub fn where_eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filters.push((field.into(), value.into()));
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Whether `doc` satisfies every filter.
    pub fn matches(&self, doc: &Document) -> bool {
        self.filters
            .iter()
            .all(|(field, value)| doc.get(field) == Some(value))
    }
}

/// Persistence addressed by collection name and document id.
///
/// Results of [`query`](DocumentStore::query) are `(id, document)` pairs
/// ordered by document id.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch one document. `Ok(None)` when it does not exist.
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError>;

    /// Create or fully replace a document.
    async fn set(&self, collection: &str, id: &str, document: &Document) -> Result<(), StoreError>;

    /// Delete a document. Deleting a missing document is not an error.
    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError>;

    async fn query(
        &self,
        collection: &str,
        query: &Query,
    ) -> Result<Vec<(String, Document)>, StoreError>;

    /// Verify the store is reachable and the credentials are accepted.
    async fn ping(&self) -> Result<(), StoreError>;

    /// Release resources held by the store. Called once during shutdown.
    async fn close(&self) {}
}

//! Firestore REST backend for [`DocumentStore`].
//!
//! Talks to the v1 REST API using a service-account credential:
//!
//! ```text
//! GET    {documents}/{collection}/{id}     -> get
//! PATCH  {documents}/{collection}/{id}     -> set (no update mask: full replace)
//! DELETE {documents}/{collection}/{id}     -> delete
//! POST   {documents}:runQuery              -> query
//! ```

pub mod auth;
pub mod credentials;
pub mod value;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde_json::{json, Value};

pub use self::auth::TokenSource;
pub use self::credentials::ServiceAccount;
use crate::store::{Document, DocumentStore, Query, StoreError};

/// Base URL of the Firestore REST API.
pub const FIRESTORE_API: &str = "https://firestore.googleapis.com/v1";

/// Timeout for a single Firestore or token request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

pub struct FirestoreStore {
    client: reqwest::Client,
    documents_url: Url,
    tokens: TokenSource,
}

impl FirestoreStore {
    /// Build a store for the given service account.
    ///
    /// No network traffic happens here; call [`DocumentStore::ping`] to
    /// verify the credential against the token endpoint.
    pub fn new(account: &ServiceAccount) -> Result<Self, StoreError> {
        Self::with_api_base(account, FIRESTORE_API)
    }

    /// Like [`new`](Self::new), against another REST endpoint (an emulator,
    /// for instance).
    pub fn with_api_base(account: &ServiceAccount, api_base: &str) -> Result<Self, StoreError> {
        let client = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        let documents_url = documents_url(api_base, account)?;
        let tokens = TokenSource::new(client.clone(), account)?;

        Ok(Self {
            client,
            documents_url,
            tokens,
        })
    }

    fn document_url(&self, collection: &str, id: &str) -> Result<Url, StoreError> {
        let mut url = self.documents_url.clone();
        url.path_segments_mut()
            .map_err(|_| StoreError::Codec("Firestore base URL cannot hold a path".into()))?
            .push(collection)
            .push(id);
        Ok(url)
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response, StoreError> {
        let token = self.tokens.token().await?;
        Ok(request.bearer_auth(token).send().await?)
    }
}

/// Resource URL of the documents root for the account's project/database.
pub fn documents_url(api_base: &str, account: &ServiceAccount) -> Result<Url, StoreError> {
    let raw = format!(
        "{api_base}/projects/{}/databases/{}/documents",
        account.project_id, account.database
    );
    Url::parse(&raw).map_err(|e| StoreError::Codec(format!("invalid Firestore URL '{raw}': {e}")))
}

/// Body of a `:runQuery` request.
pub fn structured_query(collection: &str, query: &Query) -> Value {
    let mut structured = json!({ "from": [{ "collectionId": collection }] });

    let mut filters: Vec<Value> = query
        .filters
        .iter()
        .map(|(field, value)| {
            json!({
                "fieldFilter": {
                    "field": { "fieldPath": field },
                    "op": "EQUAL",
                    "value": value::encode_value(value),
                }
            })
        })
        .collect();

    match filters.len() {
        0 => {}
        1 => structured["where"] = filters.remove(0),
        _ => {
            structured["where"] = json!({
                "compositeFilter": { "op": "AND", "filters": filters }
            })
        }
    }

    if let Some(limit) = query.limit {
        structured["limit"] = json!(limit);
    }

    json!({ "structuredQuery": structured })
}

/// Pass through a success response, otherwise capture status and body.
async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, StoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(StoreError::Api {
        status: status.as_u16(),
        body,
    })
}

#[async_trait]
impl DocumentStore for FirestoreStore {
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError> {
        let url = self.document_url(collection, id)?;
        let response = self.send(self.client.get(url)).await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let resource: Value = ensure_success(response).await?.json().await?;
        let (_, document) = value::decode_document(&resource)?;
        Ok(Some(document))
    }

    async fn set(&self, collection: &str, id: &str, document: &Document) -> Result<(), StoreError> {
        let url = self.document_url(collection, id)?;
        let body = json!({ "fields": value::encode_fields(document) });
        let response = self.send(self.client.patch(url).json(&body)).await?;
        ensure_success(response).await?;
        tracing::debug!(collection, id, "Firestore document written");
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        let url = self.document_url(collection, id)?;
        let response = self.send(self.client.delete(url)).await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(());
        }
        ensure_success(response).await?;
        tracing::debug!(collection, id, "Firestore document deleted");
        Ok(())
    }

    async fn query(
        &self,
        collection: &str,
        query: &Query,
    ) -> Result<Vec<(String, Document)>, StoreError> {
        let url = format!("{}:runQuery", self.documents_url);
        let body = structured_query(collection, query);
        let response = self.send(self.client.post(url).json(&body)).await?;

        // One entry per result; entries without `document` only carry read metadata.
        let results: Vec<Value> = ensure_success(response).await?.json().await?;
        results
            .iter()
            .filter_map(|entry| entry.get("document"))
            .map(value::decode_document)
            .collect()
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.tokens.token().await.map(|_| ())
    }

    async fn close(&self) {
        self.tokens.clear().await;
        tracing::info!("Firestore store closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRIVATE_KEY: &str = include_str!("../../tests/fixtures/service_account_key.pem");

    fn account() -> ServiceAccount {
        ServiceAccount {
            project_id: "atal-test".into(),
            private_key_id: "key-1".into(),
            private_key: PRIVATE_KEY.into(),
            client_email: "svc@atal-test.iam.gserviceaccount.com".into(),
            token_uri: credentials::DEFAULT_TOKEN_URI.into(),
            database: credentials::DEFAULT_DATABASE.into(),
        }
    }

    #[test]
    fn document_urls_are_scoped_to_project_and_database() {
        let store = FirestoreStore::new(&account()).unwrap();
        let url = store.document_url("components", "esp32").unwrap();
        assert_eq!(
            url.as_str(),
            "https://firestore.googleapis.com/v1/projects/atal-test/databases/(default)/documents/components/esp32"
        );
    }

    #[test]
    fn document_ids_are_percent_encoded() {
        let store = FirestoreStore::new(&account()).unwrap();
        let url = store.document_url("components", "a b?c").unwrap();
        assert!(url.as_str().ends_with("/documents/components/a%20b%3Fc"));
    }

    #[test]
    fn query_without_filters_only_limits() {
        let body = structured_query("components", &Query::new().limit(1));
        assert_eq!(
            body,
            json!({"structuredQuery": {
                "from": [{"collectionId": "components"}],
                "limit": 1,
            }})
        );
    }

    #[test]
    fn single_filter_is_a_field_filter() {
        let body = structured_query(
            "projects",
            &Query::new().where_eq("user_id", "u1"),
        );
        assert_eq!(
            body["structuredQuery"]["where"],
            json!({"fieldFilter": {
                "field": {"fieldPath": "user_id"},
                "op": "EQUAL",
                "value": {"stringValue": "u1"},
            }})
        );
        assert!(body["structuredQuery"].get("limit").is_none());
    }

    #[test]
    fn multiple_filters_are_and_composed() {
        let body = structured_query(
            "components",
            &Query::new()
                .where_eq("category", "Sensors")
                .where_eq("availability", "Available")
                .limit(100),
        );
        let filter = &body["structuredQuery"]["where"]["compositeFilter"];
        assert_eq!(filter["op"], "AND");
        assert_eq!(filter["filters"].as_array().unwrap().len(), 2);
        assert_eq!(body["structuredQuery"]["limit"], 100);
    }
}

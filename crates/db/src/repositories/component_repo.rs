//! Repository for the `components` collection.

use atal_core::catalog::{category_filter, clamp_limit, matches_search, search_term};
use atal_core::types::new_doc_id;
use chrono::Utc;

use super::decode_all;
use crate::collections::COMPONENTS;
use crate::models::component::{Component, ComponentListParams, CreateComponent};
use crate::models::{from_document, to_document};
use crate::seed::default_components;
use crate::store::{DocumentStore, Query, StoreError};

/// Provides CRUD operations for components.
pub struct ComponentRepo;

impl ComponentRepo {
    /// Insert a new component under a fresh id, returning it.
    pub async fn create(
        store: &dyn DocumentStore,
        input: &CreateComponent,
    ) -> Result<Component, StoreError> {
        let component = Component::new(new_doc_id(), input.clone(), Utc::now());
        store
            .set(COMPONENTS, &component.id, &to_document(&component)?)
            .await?;
        Ok(component)
    }

    pub async fn find_by_id(
        store: &dyn DocumentStore,
        id: &str,
    ) -> Result<Option<Component>, StoreError> {
        store
            .get(COMPONENTS, id)
            .await?
            .map(|doc| from_document(id.to_string(), doc))
            .transpose()
    }

    /// List components.
    ///
    /// The category filter and limit are pushed down to the store; the
    /// free-text search then filters the fetched page.
    pub async fn list(
        store: &dyn DocumentStore,
        params: &ComponentListParams,
    ) -> Result<Vec<Component>, StoreError> {
        let mut query = Query::new().limit(clamp_limit(params.limit));
        if let Some(category) = category_filter(params.category.as_deref()) {
            query = query.where_eq("category", category);
        }

        let components = decode_all(store.query(COMPONENTS, &query).await?)?;
        Ok(apply_search(components, params.search.as_deref()))
    }

    /// List the built-in catalog with the same filters as [`list`](Self::list).
    ///
    /// Used when no store is available.
    pub fn list_default_catalog(params: &ComponentListParams) -> Vec<Component> {
        let category = category_filter(params.category.as_deref());
        let components = default_components()
            .into_iter()
            .filter(|c| category.map_or(true, |wanted| c.category == wanted))
            .take(clamp_limit(params.limit))
            .collect();
        apply_search(components, params.search.as_deref())
    }

    /// Replace a component's editable fields.
    ///
    /// Returns `None` if no component with the given `id` exists. The
    /// existence check and the write are separate store calls.
    pub async fn update(
        store: &dyn DocumentStore,
        id: &str,
        input: &CreateComponent,
    ) -> Result<Option<Component>, StoreError> {
        let Some(existing) = Self::find_by_id(store, id).await? else {
            return Ok(None);
        };

        let updated = existing.replaced_with(input.clone(), Utc::now());
        store.set(COMPONENTS, id, &to_document(&updated)?).await?;
        Ok(Some(updated))
    }

    /// Delete a component by ID. Returns `true` if it existed.
    pub async fn delete(store: &dyn DocumentStore, id: &str) -> Result<bool, StoreError> {
        if store.get(COMPONENTS, id).await?.is_none() {
            return Ok(false);
        }
        store.delete(COMPONENTS, id).await?;
        Ok(true)
    }
}

fn apply_search(components: Vec<Component>, search: Option<&str>) -> Vec<Component> {
    let Some(term) = search_term(search) else {
        return components;
    };
    components
        .into_iter()
        .filter(|c| matches_search(&term, &c.name, &c.description, &c.category))
        .collect()
}

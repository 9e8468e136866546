//! Repository for the `projects` collection.

use atal_core::types::new_doc_id;
use chrono::Utc;

use super::decode_all;
use crate::collections::PROJECTS;
use crate::models::project::{CreateProject, Project, ProjectListParams};
use crate::models::{from_document, to_document};
use crate::store::{DocumentStore, Query, StoreError};

/// Provides CRUD operations for saved projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Save a new project under a fresh id, stamping the save date.
    pub async fn create(
        store: &dyn DocumentStore,
        input: &CreateProject,
    ) -> Result<Project, StoreError> {
        let project = Project::new(new_doc_id(), input.clone(), Utc::now());
        store
            .set(PROJECTS, &project.id, &to_document(&project)?)
            .await?;
        Ok(project)
    }

    pub async fn find_by_id(
        store: &dyn DocumentStore,
        id: &str,
    ) -> Result<Option<Project>, StoreError> {
        store
            .get(PROJECTS, id)
            .await?
            .map(|doc| from_document(id.to_string(), doc))
            .transpose()
    }

    /// List projects, optionally only those owned by `user_id`.
    pub async fn list(
        store: &dyn DocumentStore,
        params: &ProjectListParams,
    ) -> Result<Vec<Project>, StoreError> {
        let query = match params.user_id.as_deref().filter(|u| !u.is_empty()) {
            Some(user_id) => Query::new().where_eq("user_id", user_id),
            None => Query::new(),
        };
        decode_all(store.query(PROJECTS, &query).await?)
    }

    /// Replace a project's editable fields, keeping id and save date.
    ///
    /// Returns `None` if no project with the given `id` exists.
    pub async fn update(
        store: &dyn DocumentStore,
        id: &str,
        input: &CreateProject,
    ) -> Result<Option<Project>, StoreError> {
        let Some(existing) = Self::find_by_id(store, id).await? else {
            return Ok(None);
        };

        let updated = existing.replaced_with(input.clone());
        store.set(PROJECTS, id, &to_document(&updated)?).await?;
        Ok(Some(updated))
    }

    /// Delete a project by ID. Returns `true` if it existed.
    pub async fn delete(store: &dyn DocumentStore, id: &str) -> Result<bool, StoreError> {
        if store.get(PROJECTS, id).await?.is_none() {
            return Ok(false);
        }
        store.delete(PROJECTS, id).await?;
        Ok(true)
    }
}

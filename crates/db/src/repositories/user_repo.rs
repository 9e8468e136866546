//! Repository for the `users` collection.

use atal_core::types::new_doc_id;
use chrono::Utc;

use crate::collections::USERS;
use crate::models::user::{CreateUser, User};
use crate::models::{from_document, to_document};
use crate::store::{DocumentStore, StoreError};

pub struct UserRepo;

impl UserRepo {
    pub async fn create(store: &dyn DocumentStore, input: &CreateUser) -> Result<User, StoreError> {
        let user = User::new(new_doc_id(), input.clone(), Utc::now());
        store.set(USERS, &user.id, &to_document(&user)?).await?;
        Ok(user)
    }

    pub async fn find_by_id(store: &dyn DocumentStore, id: &str) -> Result<Option<User>, StoreError> {
        store
            .get(USERS, id)
            .await?
            .map(|doc| from_document(id.to_string(), doc))
            .transpose()
    }
}

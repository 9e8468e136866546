//! User entity model and DTOs.

use atal_core::types::{DocId, Timestamp};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A document from the `users` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: DocId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    pub created_at: Timestamp,
}

impl User {
    pub fn new(id: DocId, input: CreateUser, now: Timestamp) -> Self {
        Self {
            id,
            name: input.name,
            email: input.email,
            avatar_url: input.avatar_url,
            created_at: now,
        }
    }
}

/// DTO for creating a user.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUser {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

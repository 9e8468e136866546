//! Saved project entity model and DTOs.

use atal_core::types::{DocId, Timestamp};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Progress label on a saved project. Any value may follow any other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    #[default]
    Saved,
    InProgress,
    Completed,
}

/// A document from the `projects` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: DocId,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub difficulty: String,
    #[serde(default)]
    pub status: ProjectStatus,
    #[serde(rename = "dateSaved")]
    pub date_saved: Timestamp,
    pub instructions: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub user_id: Option<DocId>,
}

impl Project {
    pub fn new(id: DocId, input: CreateProject, saved_at: Timestamp) -> Self {
        Self {
            id,
            title: input.title,
            category: input.category,
            tags: input.tags,
            difficulty: input.difficulty,
            status: input.status,
            date_saved: saved_at,
            instructions: input.instructions,
            requirements: input.requirements,
            notes: input.notes,
            user_id: input.user_id,
        }
    }

    /// Replace every caller-editable field, keeping identity and save date.
    pub fn replaced_with(self, input: CreateProject) -> Self {
        Self::new(self.id, input, self.date_saved)
    }
}

/// DTO for saving or fully replacing a project.
///
/// Clients may echo `id` and `dateSaved` back; both are ignored because
/// they are assigned server-side.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProject {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub difficulty: String,
    #[serde(default)]
    pub status: ProjectStatus,
    pub instructions: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub user_id: Option<DocId>,
}

/// Query parameters for `GET /api/projects`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectListParams {
    pub user_id: Option<DocId>,
}

//! Handlers for the `/projects` resource.

use atal_core::error::CoreError;
use atal_core::validation::validate;
use atal_db::models::project::{CreateProject, Project, ProjectListParams};
use atal_db::repositories::ProjectRepo;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppQuery};
use crate::response::MessageResponse;
use crate::state::AppState;

fn not_found(id: String) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Project",
        id,
    })
}

/// GET /api/projects
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<ProjectListParams>,
) -> AppResult<Json<Vec<Project>>> {
    let projects = ProjectRepo::list(state.store()?, &params).await?;
    Ok(Json(projects))
}

/// POST /api/projects
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    validate(&input)?;
    let project = ProjectRepo::create(state.store()?, &input).await?;
    tracing::info!(project_id = %project.id, user_id = ?project.user_id, "Project saved");
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::find_by_id(state.store()?, &id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(project))
}

/// PUT /api/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(input): AppJson<CreateProject>,
) -> AppResult<Json<Project>> {
    validate(&input)?;
    let project = ProjectRepo::update(state.store()?, &id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(project_id = %project.id, status = ?project.status, "Project updated");
    Ok(Json(project))
}

/// DELETE /api/projects/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    if !ProjectRepo::delete(state.store()?, &id).await? {
        return Err(not_found(id));
    }
    tracing::info!(project_id = %id, "Project deleted");
    Ok(Json(MessageResponse::new("Project deleted successfully")))
}

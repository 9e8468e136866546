//! Handlers for the `/components` resource.

use atal_core::error::CoreError;
use atal_core::validation::validate;
use atal_db::models::component::{Component, ComponentListParams, CreateComponent};
use atal_db::repositories::ComponentRepo;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppQuery};
use crate::response::MessageResponse;
use crate::state::AppState;

fn not_found(id: String) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Component",
        id,
    })
}

/// GET /api/components
///
/// Falls back to the built-in catalog when no document store is available.
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<ComponentListParams>,
) -> AppResult<Json<Vec<Component>>> {
    let components = match state.store.as_deref() {
        Some(store) => ComponentRepo::list(store, &params).await?,
        None => {
            tracing::debug!("No document store, serving the default catalog");
            ComponentRepo::list_default_catalog(&params)
        }
    };
    Ok(Json(components))
}

/// POST /api/components
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateComponent>,
) -> AppResult<(StatusCode, Json<Component>)> {
    validate(&input)?;
    let component = ComponentRepo::create(state.store()?, &input).await?;
    tracing::info!(component_id = %component.id, "Component created");
    Ok((StatusCode::CREATED, Json(component)))
}

/// GET /api/components/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Component>> {
    let component = ComponentRepo::find_by_id(state.store()?, &id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(component))
}

/// PUT /api/components/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(input): AppJson<CreateComponent>,
) -> AppResult<Json<Component>> {
    validate(&input)?;
    let component = ComponentRepo::update(state.store()?, &id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(component_id = %component.id, "Component updated");
    Ok(Json(component))
}

/// DELETE /api/components/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    if !ComponentRepo::delete(state.store()?, &id).await? {
        return Err(not_found(id));
    }
    tracing::info!(component_id = %id, "Component deleted");
    Ok(Json(MessageResponse::new("Component deleted successfully")))
}

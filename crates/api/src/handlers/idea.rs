//! Handler for project idea generation.

use std::time::Duration;

use atal_core::ideas::{generate_ideas, GenerateIdeasRequest, IdeaPreferences, ProjectIdea};
use axum::extract::State;
use axum::Json;
use chrono::Utc;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::state::AppState;

/// POST /api/projects/generate
///
/// Returns three templated ideas after a configurable delay standing in
/// for inference latency. Does not touch the document store.
pub async fn generate(
    State(state): State<AppState>,
    AppJson(input): AppJson<GenerateIdeasRequest>,
) -> AppResult<Json<Vec<ProjectIdea>>> {
    let preferences = IdeaPreferences::resolve(&input)?;

    let delay = Duration::from_millis(state.config.idea_generation_delay_ms);
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    let ideas = generate_ideas(&preferences, Utc::now());
    tracing::info!(
        difficulty = %preferences.difficulty,
        estimated_time = %preferences.estimated_time,
        category = %preferences.category,
        has_notes = input.notes.as_deref().is_some_and(|n| !n.is_empty()),
        "Generated project ideas"
    );
    Ok(Json(ideas))
}

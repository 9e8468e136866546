pub mod component;
pub mod health;
pub mod project;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /components                 list, create
/// /components/{id}            get, update, delete
///
/// /projects                   list (?user_id=), save
/// /projects/generate          generate ideas (POST)
/// /projects/{id}              get, update, delete
///
/// /users                      create
/// /users/{id}                 get
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/components", component::router())
        .nest("/projects", project::router())
        .nest("/users", user::router())
}

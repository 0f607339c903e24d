//! Projects section CRUD
//!
//! Project bodies may embed a base64 data-URI in `image`; the router's body
//! limit is sized accordingly.

use axum::extract::{Path, State};
use axum::Json;
use folio_domain::{Project, ProjectPatch};

use super::MutationResponse;
use crate::error::{ApiError, QueryError};
use crate::state::AppState;

/// GET `/api/portfolio/projects`
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Project>>, QueryError> {
    Ok(Json(state.portfolio.list_projects().await?))
}

/// POST `/api/portfolio/projects` - append a project.
pub async fn add(
    State(state): State<AppState>,
    Json(project): Json<Project>,
) -> Result<Json<MutationResponse<Project>>, ApiError> {
    let stored = state.portfolio.add_project(project).await?;
    Ok(Json(MutationResponse::with_data(stored)))
}

/// PUT `/api/portfolio/projects/{id}` - shallow-merge a partial project.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<ProjectPatch>,
) -> Result<Json<MutationResponse<Project>>, ApiError> {
    let updated = state.portfolio.update_project(&id, patch).await?;
    Ok(Json(MutationResponse::with_data(updated)))
}

/// DELETE `/api/portfolio/projects/{id}` - idempotent.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MutationResponse<()>>, ApiError> {
    state.portfolio.delete_project(&id).await?;
    Ok(Json(MutationResponse::ok()))
}

//! Experience section CRUD

use axum::extract::{Path, State};
use axum::Json;
use folio_domain::{ExperienceEntry, ExperiencePatch};

use super::MutationResponse;
use crate::error::{ApiError, QueryError};
use crate::state::AppState;

/// GET `/api/portfolio/experience`
pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<Vec<ExperienceEntry>>, QueryError> {
    Ok(Json(state.portfolio.list_experience().await?))
}

/// POST `/api/portfolio/experience` - append an entry.
pub async fn add(
    State(state): State<AppState>,
    Json(entry): Json<ExperienceEntry>,
) -> Result<Json<MutationResponse<ExperienceEntry>>, ApiError> {
    let stored = state.portfolio.add_experience(entry).await?;
    Ok(Json(MutationResponse::with_data(stored)))
}

/// PUT `/api/portfolio/experience/{id}` - shallow-merge a partial entry.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<ExperiencePatch>,
) -> Result<Json<MutationResponse<ExperienceEntry>>, ApiError> {
    let updated = state.portfolio.update_experience(&id, patch).await?;
    Ok(Json(MutationResponse::with_data(updated)))
}

/// DELETE `/api/portfolio/experience/{id}` - idempotent.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MutationResponse<()>>, ApiError> {
    state.portfolio.delete_experience(&id).await?;
    Ok(Json(MutationResponse::ok()))
}

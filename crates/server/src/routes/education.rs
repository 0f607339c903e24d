//! Education section CRUD

use axum::extract::{Path, State};
use axum::Json;
use folio_domain::{EducationEntry, EducationPatch};

use super::MutationResponse;
use crate::error::{ApiError, QueryError};
use crate::state::AppState;

/// GET `/api/portfolio/education`
pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<Vec<EducationEntry>>, QueryError> {
    Ok(Json(state.portfolio.list_education().await?))
}

/// POST `/api/portfolio/education` - append an entry (id supplied by caller).
pub async fn add(
    State(state): State<AppState>,
    Json(entry): Json<EducationEntry>,
) -> Result<Json<MutationResponse<EducationEntry>>, ApiError> {
    let stored = state.portfolio.add_education(entry).await?;
    Ok(Json(MutationResponse::with_data(stored)))
}

/// PUT `/api/portfolio/education/{id}` - shallow-merge a partial entry.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<EducationPatch>,
) -> Result<Json<MutationResponse<EducationEntry>>, ApiError> {
    let updated = state.portfolio.update_education(&id, patch).await?;
    Ok(Json(MutationResponse::with_data(updated)))
}

/// DELETE `/api/portfolio/education/{id}` - idempotent.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MutationResponse<()>>, ApiError> {
    state.portfolio.delete_education(&id).await?;
    Ok(Json(MutationResponse::ok()))
}

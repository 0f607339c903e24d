//! Skills section CRUD
//!
//! Skills are an insertion-ordered map from category name to items; the
//! category is created on first add and removed wholesale on category
//! delete.

use axum::extract::{Path, State};
use axum::Json;
use folio_domain::{SkillItem, SkillMap};
use serde::Deserialize;

use super::MutationResponse;
use crate::error::{ApiError, QueryError};
use crate::state::AppState;

/// GET `/api/portfolio/skills`
pub async fn list(State(state): State<AppState>) -> Result<Json<SkillMap>, QueryError> {
    Ok(Json(state.portfolio.skills().await?))
}

#[derive(Debug, Deserialize)]
pub struct AddSkillRequest {
    pub category: String,
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
}

/// POST `/api/portfolio/skills` - append a skill, creating the category if
/// absent.
pub async fn add(
    State(state): State<AppState>,
    Json(body): Json<AddSkillRequest>,
) -> Result<Json<MutationResponse<SkillItem>>, ApiError> {
    let item = state.portfolio.add_skill(&body.category, &body.name, body.icon).await?;
    Ok(Json(MutationResponse::with_data(item)))
}

/// DELETE `/api/portfolio/skills/{category}` - drop a whole category;
/// silent success when it does not exist.
pub async fn remove_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<MutationResponse<()>>, ApiError> {
    state.portfolio.delete_skill_category(&category).await?;
    Ok(Json(MutationResponse::ok()))
}

/// DELETE `/api/portfolio/skills/{category}/{name}` - remove every matching
/// item; 404 when the category does not exist.
pub async fn remove_item(
    State(state): State<AppState>,
    Path((category, name)): Path<(String, String)>,
) -> Result<Json<MutationResponse<()>>, ApiError> {
    state.portfolio.delete_skill_item(&category, &name).await?;
    Ok(Json(MutationResponse::ok()))
}

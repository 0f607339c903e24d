//! Aggregate-level handlers: full read, About section, profile image

use axum::extract::State;
use axum::Json;
use folio_domain::{About, AboutPatch, Portfolio};
use serde::Deserialize;

use super::MutationResponse;
use crate::error::{ApiError, QueryError};
use crate::state::AppState;

/// GET `/api/portfolio` - the whole aggregate, created on first read.
pub async fn get_portfolio(
    State(state): State<AppState>,
) -> Result<Json<Portfolio>, QueryError> {
    Ok(Json(state.portfolio.get_portfolio().await?))
}

/// PUT `/api/portfolio/about` - shallow-merge a partial About.
pub async fn update_about(
    State(state): State<AppState>,
    Json(patch): Json<AboutPatch>,
) -> Result<Json<MutationResponse<About>>, ApiError> {
    let about = state.portfolio.update_about(patch).await?;
    Ok(Json(MutationResponse::with_data(about)))
}

#[derive(Debug, Deserialize)]
pub struct SetProfileImageRequest {
    /// Data-URI encoded image; `null` clears the stored image.
    #[serde(default)]
    pub image: Option<String>,
}

/// POST `/api/portfolio/profile-image` - overwrite the profile image.
pub async fn set_profile_image(
    State(state): State<AppState>,
    Json(body): Json<SetProfileImageRequest>,
) -> Result<Json<MutationResponse<()>>, ApiError> {
    state.portfolio.set_profile_image(body.image).await?;
    Ok(Json(MutationResponse::ok()))
}

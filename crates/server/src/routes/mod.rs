//! REST route handlers
//!
//! One module per portfolio section, mirroring the API surface consumed by
//! the front end. All routes live under `/api/portfolio`.

pub mod education;
pub mod experience;
pub mod health;
pub mod portfolio;
pub mod projects;
pub mod skills;

use axum::routing::{delete, get, post, put};
use axum::Router;
use serde::Serialize;

use crate::state::AppState;

/// Success envelope for mutating endpoints: `{"success": true}` with an
/// optional `data` payload.
#[derive(Debug, Serialize)]
pub struct MutationResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> MutationResponse<T> {
    /// Success with a payload.
    pub fn with_data(data: T) -> Self {
        Self { success: true, data: Some(data) }
    }
}

impl MutationResponse<()> {
    /// Bare success, for deletes and image uploads.
    pub fn ok() -> Self {
        Self { success: true, data: None }
    }
}

/// Assemble the full API route table.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/api/portfolio", get(portfolio::get_portfolio))
        .route("/api/portfolio/about", put(portfolio::update_about))
        .route("/api/portfolio/education", get(education::list).post(education::add))
        .route(
            "/api/portfolio/education/{id}",
            put(education::update).delete(education::remove),
        )
        .route("/api/portfolio/experience", get(experience::list).post(experience::add))
        .route(
            "/api/portfolio/experience/{id}",
            put(experience::update).delete(experience::remove),
        )
        .route("/api/portfolio/projects", get(projects::list).post(projects::add))
        .route("/api/portfolio/projects/{id}", put(projects::update).delete(projects::remove))
        .route("/api/portfolio/skills", get(skills::list).post(skills::add))
        .route("/api/portfolio/skills/{category}", delete(skills::remove_category))
        .route("/api/portfolio/skills/{category}/{name}", delete(skills::remove_item))
        .route("/api/portfolio/profile-image", post(portfolio::set_profile_image))
        .route("/health", get(health::health))
}

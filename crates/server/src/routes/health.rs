//! Liveness endpoint

use axum::extract::State;
use axum::Json;
use folio_domain::FolioError;
use serde_json::{json, Value};
use tokio::task;

use crate::error::QueryError;
use crate::state::AppState;

/// GET `/health` - verify the process and its backing store are responsive.
pub async fn health(State(state): State<AppState>) -> Result<Json<Value>, QueryError> {
    let db = state.db.clone();
    task::spawn_blocking(move || db.health_check())
        .await
        .map_err(|err| QueryError(FolioError::Internal(format!("Task join error: {err}"))))??;
    Ok(Json(json!({ "status": "ok" })))
}

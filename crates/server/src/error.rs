//! HTTP error mapping
//!
//! Two wire shapes, matching the front end's expectations: mutating
//! endpoints answer `{"success": false, "error": <text>}`, read endpoints
//! answer `{"error": <text>}`. Status codes: `NotFound` maps to 404,
//! `InvalidInput` to 400, everything else to 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use folio_domain::FolioError;
use serde::Serialize;
use tracing::error;

/// Error wrapper for mutating endpoints.
#[derive(Debug)]
pub struct ApiError(pub FolioError);

/// Error wrapper for read endpoints.
#[derive(Debug)]
pub struct QueryError(pub FolioError);

#[derive(Serialize)]
struct FailureBody {
    success: bool,
    error: String,
}

#[derive(Serialize)]
struct QueryFailureBody {
    error: String,
}

fn status_for(err: &FolioError) -> StatusCode {
    match err {
        FolioError::NotFound(_) => StatusCode::NOT_FOUND,
        FolioError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl From<FolioError> for ApiError {
    fn from(err: FolioError) -> Self {
        Self(err)
    }
}

impl From<FolioError> for QueryError {
    fn from(err: FolioError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = status_for(&self.0);
        if status.is_server_error() {
            error!(error = %self.0, "request failed");
        }
        let body = FailureBody { success: false, error: self.0.to_string() };
        (status, Json(body)).into_response()
    }
}

impl IntoResponse for QueryError {
    fn into_response(self) -> Response {
        let status = status_for(&self.0);
        if status.is_server_error() {
            error!(error = %self.0, "request failed");
        }
        let body = QueryFailureBody { error: self.0.to_string() };
        (status, Json(body)).into_response()
    }
}

//! Shared application state for the HTTP layer

use std::sync::Arc;

use folio_core::PortfolioService;
use folio_infra::DbManager;

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    /// The portfolio service owning all aggregate operations.
    pub portfolio: Arc<PortfolioService>,
    /// Database manager, used by the health endpoint.
    pub db: Arc<DbManager>,
    /// Bearer token required on mutating requests, when configured.
    pub admin_token: Option<String>,
}

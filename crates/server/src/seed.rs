//! Startup seeding
//!
//! When a seed file is configured, its aggregate is persisted only if the
//! store is still empty; an already-populated store is never overwritten.

use folio_core::PortfolioService;
use folio_domain::{FolioError, Portfolio, Result};
use tracing::info;

/// Apply the seed aggregate from a JSON file to an empty store.
///
/// Returns `true` when the seed was applied.
pub async fn seed_from_file(service: &PortfolioService, path: &str) -> Result<bool> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|err| FolioError::Config(format!("failed to read seed file {path}: {err}")))?;

    let portfolio: Portfolio = serde_json::from_str(&contents)
        .map_err(|err| FolioError::Config(format!("invalid seed file {path}: {err}")))?;

    let applied = service.seed_if_empty(portfolio).await?;
    if applied {
        info!(path, "seed aggregate applied to empty store");
    } else {
        info!(path, "store already populated, seed skipped");
    }
    Ok(applied)
}

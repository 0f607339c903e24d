//! Port interfaces for portfolio persistence
//!
//! These traits define the boundary between core business logic
//! and infrastructure implementations.

use async_trait::async_trait;
use folio_domain::{Portfolio, Result};

/// Trait for persisting the single portfolio aggregate.
///
/// The aggregate is always read and written as a whole document; there is
/// no partial persistence at this boundary.
#[async_trait]
pub trait PortfolioRepository: Send + Sync {
    /// Load the aggregate, or `None` when no document has been persisted yet.
    async fn load(&self) -> Result<Option<Portfolio>>;

    /// Persist the aggregate, replacing any previously stored document.
    async fn save(&self, portfolio: Portfolio) -> Result<()>;
}

//! Folio server binary
//!
//! Startup order: environment, logging, config, database (fatal when
//! unreachable), optional seed, then serve.

use std::sync::Arc;

use folio_core::PortfolioService;
use folio_infra::{DbManager, SqlitePortfolioRepository};
use folio_server::state::AppState;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = folio_infra::config::load()?;

    // A server with no backing store is useless; storage failures at boot
    // are fatal.
    let db = Arc::new(DbManager::new(&config.database.path, config.database.pool_size)?);
    db.run_migrations()?;
    info!(db_path = %config.database.path, "database ready");

    let repository = Arc::new(SqlitePortfolioRepository::new(Arc::clone(&db)));
    let service = Arc::new(PortfolioService::new(repository));

    if let Some(seed_path) = config.server.seed_path.as_deref() {
        folio_server::seed::seed_from_file(&service, seed_path).await?;
    }

    let state = AppState {
        portfolio: service,
        db,
        admin_token: config.server.admin_token.clone(),
    };

    folio_server::serve(state, config.server.port).await?;
    Ok(())
}

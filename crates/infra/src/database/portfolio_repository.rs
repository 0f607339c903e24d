//! Portfolio repository implementation using SQLite
//!
//! The aggregate is persisted as one JSON document in a single-row table;
//! every save replaces the whole document, matching the read-modify-write
//! contract of the core service.

use std::sync::Arc;

use async_trait::async_trait;
use folio_core::PortfolioRepository as PortfolioRepositoryPort;
use folio_domain::{FolioError, Portfolio, Result as DomainResult};
use rusqlite::params;
use tokio::task;

use super::manager::{map_sql_error, DbManager};

/// SQLite-backed implementation of `PortfolioRepository`.
pub struct SqlitePortfolioRepository {
    db: Arc<DbManager>,
}

impl SqlitePortfolioRepository {
    /// Create a new repository instance.
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PortfolioRepositoryPort for SqlitePortfolioRepository {
    async fn load(&self) -> DomainResult<Option<Portfolio>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<Option<Portfolio>> {
            let conn = db.get_connection()?;

            let result = conn.query_row(
                "SELECT document FROM portfolio WHERE id = 1",
                [],
                |row| row.get::<_, String>(0),
            );

            match result {
                Ok(document) => {
                    let portfolio = serde_json::from_str(&document).map_err(|err| {
                        FolioError::Serialization(format!("invalid portfolio document: {err}"))
                    })?;
                    Ok(Some(portfolio))
                }
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(err) => Err(map_sql_error(err)),
            }
        })
        .await
        .map_err(map_join_error)?
    }

    async fn save(&self, portfolio: Portfolio) -> DomainResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<()> {
            let document = serde_json::to_string(&portfolio).map_err(|err| {
                FolioError::Serialization(format!("failed to serialize portfolio: {err}"))
            })?;

            let conn = db.get_connection()?;
            conn.execute(
                "INSERT INTO portfolio (id, document, created_at, updated_at)
                 VALUES (1, ?1, CAST(strftime('%s','now') AS INTEGER), CAST(strftime('%s','now') AS INTEGER))
                 ON CONFLICT(id) DO UPDATE SET
                    document = excluded.document,
                    updated_at = CAST(strftime('%s','now') AS INTEGER)",
                params![document],
            )
            .map_err(map_sql_error)?;
            Ok(())
        })
        .await
        .map_err(map_join_error)?
    }
}

fn map_join_error(err: task::JoinError) -> FolioError {
    FolioError::Internal(format!("Task join error: {err}"))
}

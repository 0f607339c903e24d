//! # Folio Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - The SQLite-backed portfolio repository (aggregate stored as one JSON
//!   document in a single-row table)
//! - Database pool manager and migrations
//! - Configuration loading
//!
//! ## Architecture
//! - Implements traits defined in `folio-core`
//! - Depends on `folio-domain` and `folio-core`
//! - Contains all "impure" code (I/O)

pub mod config;
pub mod database;

// Re-export commonly used items
pub use database::{DbManager, SqlitePortfolioRepository};

//! Configuration structures
//!
//! Loaded by `folio-infra`'s loader from environment variables or a
//! JSON/TOML file.

use serde::{Deserialize, Serialize};

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
}

/// Database settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file.
    pub path: String,
    /// Connection pool size.
    pub pool_size: u32,
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port to listen on.
    pub port: u16,
    /// Bearer token required on mutating endpoints. When absent the API is
    /// open, matching the original single-admin contract.
    #[serde(default)]
    pub admin_token: Option<String>,
    /// Optional JSON file with an initial aggregate, applied only when the
    /// store is empty.
    #[serde(default)]
    pub seed_path: Option<String>,
}

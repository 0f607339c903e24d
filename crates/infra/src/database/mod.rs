//! SQLite persistence for the portfolio aggregate

pub mod manager;
pub mod portfolio_repository;

pub use manager::DbManager;
pub use portfolio_repository::SqlitePortfolioRepository;

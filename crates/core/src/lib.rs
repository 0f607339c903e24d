//! # Folio Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The `PortfolioRepository` port (trait)
//! - The `PortfolioService` implementing every portfolio operation as a
//!   read-modify-write of the single aggregate
//!
//! ## Architecture Principles
//! - Only depends on `folio-domain`
//! - No database or HTTP code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod portfolio;

// Re-export specific items to avoid ambiguity
pub use portfolio::ports::PortfolioRepository;
pub use portfolio::PortfolioService;

//! # Folio Domain
//!
//! Business domain types and models for the portfolio backend.
//!
//! This crate contains:
//! - The `Portfolio` aggregate and its section types
//! - Patch types implementing shallow-merge partial updates
//! - Domain error types and Result definitions
//! - Configuration structures
//!
//! ## Architecture
//! - No dependencies on other folio crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;

//! Portfolio aggregate operations

pub mod ports;
pub mod service;

pub use service::PortfolioService;

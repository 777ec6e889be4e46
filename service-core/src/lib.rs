//! service-core: shared infrastructure for the home-run odds services.
pub mod config;
pub mod error;
pub mod middleware;
pub mod observability;


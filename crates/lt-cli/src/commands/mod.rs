//! CLI command implementations.

pub mod audit;
pub mod show;
pub mod venues;

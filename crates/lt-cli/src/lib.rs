//! Leisure timetable CLI library.
//!
//! This crate provides the presentation layer over `lt-core`: catalog
//! loading, filter flags, and rendering of the day-grouped schedule.

mod cli;
pub mod commands;
mod config;

pub use cli::{Cli, Commands};
pub use config::Config;

//! Session classification and filtering engine for the leisure timetable.
//!
//! This crate contains the pure, stateless core:
//! - Categorisation: mapping free-text activity labels to coarse categories
//! - Pool/land partitioning of sessions, with pool sub-types
//! - Start-time extraction from human-written time ranges
//! - The filter pipeline and the day-grouped, time-ordered schedule view
//!
//! There is no I/O and no shared state here; every function is a pure
//! function of its inputs, and malformed input degrades to a safe default
//! rather than an error.

pub mod catalog;
pub mod category;
pub mod filter;
pub mod pool;
pub mod schedule;
pub mod session;
pub mod time;
pub mod types;

pub use catalog::{CatalogError, parse_catalog};
pub use category::{Category, classify, uncategorized_activities};
pub use filter::{Criteria, Mode, filter_sessions};
pub use pool::{PoolType, is_pool_session, pool_type};
pub use schedule::{DayGroup, WeekSchedule, build_schedule, sort_and_group};
pub use session::Session;
pub use time::parse_start_hour;
pub use types::{Day, ParseError, Venue};

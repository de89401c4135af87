//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use lt_core::{Category, Mode, PoolType, Venue};

/// Weekly timetable browser for fitness classes and swimming sessions.
///
/// Loads a session catalog and shows it grouped by day, narrowed by venue,
/// category, virtual status, or pool area.
#[derive(Debug, Parser)]
#[command(name = "lt", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to the session catalog JSON file (overrides config).
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the week's sessions, grouped by day.
    Show {
        /// Timetable partition to browse: fitness or swimming.
        #[arg(long, default_value_t = Mode::default())]
        mode: Mode,

        /// Venue to include (repeatable; default: all venues).
        #[arg(long = "venue")]
        venues: Vec<Venue>,

        /// Restrict fitness classes to one category.
        #[arg(long)]
        category: Option<Category>,

        /// Hide virtual (streamed) classes.
        #[arg(long)]
        no_virtual: bool,

        /// Restrict swimming sessions to a pool area: all, main, or leisure.
        #[arg(long, default_value_t = PoolType::default())]
        pool_type: PoolType,

        /// Emit the grouped schedule as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List the known venues.
    Venues,

    /// List activity labels the classifier cannot place.
    Audit {
        /// Emit the labels as a JSON array.
        #[arg(long)]
        json: bool,
    },
}

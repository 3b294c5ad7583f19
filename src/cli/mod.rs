//! CLI argument parsing for skylane
//!
//! Uses clap for argument parsing. Global flags: --format, --quiet,
//! --verbose, --log-level, --log-json, --empty.

pub mod output;

use clap::{Parser, Subcommand};

pub use output::OutputFormat;
use skylane_core::network::LocationId;

/// Skylane - route network CLI
#[derive(Parser, Debug)]
#[command(name = "skylane")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = output::parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Explicit log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON to stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Start from an empty network instead of the built-in demo data
    #[arg(long, global = true)]
    pub empty: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List locations in registration order
    Locations,

    /// Display the route map
    Routes,

    /// Check whether a destination is reachable from a source
    Reach {
        /// Source location id
        from: LocationId,

        /// Destination location id
        to: LocationId,
    },

    /// Find the minimum-weight path between two locations
    Shortest {
        /// Source location id
        from: LocationId,

        /// Destination location id
        to: LocationId,
    },

    /// Find the cheapest path that differs from the shortest one
    Alternate {
        /// Source location id
        from: LocationId,

        /// Destination location id
        to: LocationId,
    },

    /// Interactive console over one in-memory network
    Console,
}

//! CLI argument parsing for campus-nav
//!
//! Global flags: --config, --format, --quiet, --verbose, --log-level, --log-json

mod output;
mod parse;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use campus_nav_core::graph::Algorithm;

pub use output::OutputFormat;
pub use parse::{parse_algorithm, parse_edge_ref, EdgeRef};

/// campus-nav - route search and animated replays over a campus map
#[derive(Parser, Debug)]
#[command(name = "campus-nav")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file (TOML)
    #[arg(long, global = true, env = "CAMPUS_NAV_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. "debug", "campus_nav_core=trace")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Map input plus edits applied before the command runs
#[derive(Args, Debug, Clone)]
pub struct MapArgs {
    /// Campus map file (TOML)
    #[arg(long, short)]
    pub map: PathBuf,

    /// Toggle whether an edge is closed, as FROM:TO (repeatable)
    #[arg(long, value_parser = parse_edge_ref, action = clap::ArgAction::Append)]
    pub toggle_closed: Vec<EdgeRef>,

    /// Toggle whether an edge is accessible, as FROM:TO (repeatable)
    #[arg(long, value_parser = parse_edge_ref, action = clap::ArgAction::Append)]
    pub toggle_accessible: Vec<EdgeRef>,
}

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    #[command(flatten)]
    pub graph: MapArgs,

    /// Start location
    #[arg(long)]
    pub from: String,

    /// Destination
    #[arg(long)]
    pub to: String,

    /// Search algorithm: bfs or dfs
    #[arg(long, short, default_value = "bfs", value_parser = parse_algorithm)]
    pub algorithm: Algorithm,

    /// Only use accessible paths
    #[arg(long)]
    pub accessible_only: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find a route between two locations
    Search(SearchArgs),

    /// List the locations reachable from a node in one step
    Neighbors {
        #[command(flatten)]
        graph: MapArgs,

        /// Location to inspect
        #[arg(long, short)]
        node: String,

        /// Only follow accessible paths
        #[arg(long)]
        accessible_only: bool,
    },

    /// Replay a search as a timed animation
    Animate {
        #[command(flatten)]
        search: SearchArgs,

        /// Wait out each event's offset instead of replaying instantly
        #[arg(long)]
        realtime: bool,
    },

    /// Draw new random distance and time weights for every edge
    Randomize {
        #[command(flatten)]
        graph: MapArgs,

        /// Seed for reproducible weights
        #[arg(long)]
        seed: Option<u64>,
    },
}

//! CLI argument parsing for rapport
//!
//! Uses clap derive. Global flags: --edges, --config, --format, --quiet,
//! --verbose, --log-level, --log-json

pub mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use output::OutputFormat;

/// Rapport - connectivity and weighted shortest paths over social graphs
#[derive(Parser, Debug)]
#[command(name = "rapport")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Edge list to load (`name, name, weight` per line)
    #[arg(long, global = true, env = "RAPPORT_EDGES")]
    pub edges: Option<PathBuf>,

    /// Configuration file (defaults to the platform config directory)
    #[arg(long, global = true)]
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

    /// Log filter: a level (`debug`) or a full directive (`rapport_core=trace`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check whether two people are in the same group
    Connected {
        /// First person
        a: String,
        /// Second person
        b: String,
    },

    /// Find the lightest route between two people
    Path {
        /// Starting person
        from: String,
        /// Destination person
        to: String,
        /// Only accept routes with total weight strictly below this (0 = unlimited)
        #[arg(long)]
        limit: Option<u64>,
        /// Skip the cross-check against single-source Dijkstra
        #[arg(long)]
        no_verify: bool,
    },

    /// Find the closest person whose name matches a pattern
    Find {
        /// Starting person
        start: String,
        /// Regular expression matched against names
        #[arg(long, short)]
        pattern: String,
        /// Only accept routes with total weight strictly below this (0 = unlimited)
        #[arg(long)]
        limit: Option<u64>,
    },

    /// List every connected group
    Components,

    /// Summarize the loaded graph
    Stats,

    /// Show or set the default weight limit
    Limit {
        /// New default limit (0 = unlimited); omit to show the current one
        value: Option<u64>,
    },
}

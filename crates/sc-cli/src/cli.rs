//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Sleep cycle calculator.
///
/// Suggests bedtimes and wake-up times that line up with 90-minute sleep
/// cycles, so you wake between cycles instead of in the middle of one.
#[derive(Debug, Parser)]
#[command(name = "sleepcalc", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Calculate bedtimes for a desired wake-up time.
    Wake {
        /// Wake-up time (e.g., 7:00 AM, 06:30, 7am).
        #[arg(required = true, num_args = 1..)]
        time: Vec<String>,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Calculate wake-up times for a given bedtime.
    #[command(alias = "sleep")]
    Bed {
        /// Bedtime (e.g., 10:30 PM, 22:30, 11 pm).
        #[arg(required = true, num_args = 1..)]
        time: Vec<String>,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Calculate wake-up times if you go to sleep right now.
    Now {
        /// Use this time instead of the local clock.
        #[arg(long, value_name = "TIME")]
        at: Option<String>,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show both bedtimes and wake-up times for one time.
    Calc {
        /// Time of day to calculate from.
        #[arg(required = true, num_args = 1..)]
        time: Vec<String>,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Learn about sleep cycles.
    Info,

    /// Start an interactive session.
    Chat,
}

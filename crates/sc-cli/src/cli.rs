//! Command-line argument definitions.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use sc_core::DateWindow;

use crate::commands::util::{parse_day, parse_month};

/// Work-hours calendar.
///
/// Reads exported shift records and reports monthly hours, break time and
/// the merged calendar blocks.
#[derive(Debug, Parser)]
#[command(name = "shiftcal", version, about, long_about = None)]
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
    /// Show hour and break totals plus merged blocks for a month.
    Summary {
        /// JSON array of shift records (`-` for stdin).
        #[arg(long)]
        records: PathBuf,

        /// Month to total, as YYYY-MM (default: current month).
        #[arg(long, value_parser = parse_month)]
        month: Option<DateWindow>,

        /// Output the full aggregation result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show the entry recorded on a day.
    Day {
        /// JSON array of shift records (`-` for stdin).
        #[arg(long)]
        records: PathBuf,

        /// Day to look up, as YYYY-MM-DD.
        #[arg(long, value_parser = parse_day)]
        date: NaiveDate,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List palette colours in picker order.
    Colors {
        /// Include inactive colours.
        #[arg(long)]
        all: bool,
    },
}

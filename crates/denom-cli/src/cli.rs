//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Denom: value-and-unit normalization for extracted financial figures
#[derive(Parser)]
#[command(name = "denom")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Normalize a single value/unit pair
    Normalize {
        /// Raw value as extracted ("4100", "4,000", "4x")
        #[arg(value_name = "VALUE")]
        value: String,

        /// Free-text unit ("million USD", "X", "ea")
        #[arg(value_name = "UNIT")]
        unit: Option<String>,

        /// Additional currency code to recognize (repeatable)
        #[arg(short, long = "code", value_name = "CODE")]
        codes: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Normalize a CSV of extracted value/unit pairs
    Batch {
        /// Path to the CSV file (header row required)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Column holding the raw value
        #[arg(long, default_value = "value")]
        value_column: String,

        /// Column holding the unit
        #[arg(long, default_value = "unit")]
        unit_column: String,

        /// Additional currency code to recognize (repeatable)
        #[arg(short, long = "code", value_name = "CODE")]
        codes: Vec<String>,

        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output as JSON instead of CSV
        #[arg(long)]
        json: bool,
    },
}

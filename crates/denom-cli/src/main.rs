//! Denom CLI - value-and-unit normalization for extracted financial figures.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Normalize {
            value,
            unit,
            codes,
            json,
        } => commands::normalize::run(value, unit, codes, json, cli.verbose),

        Commands::Batch {
            file,
            value_column,
            unit_column,
            codes,
            output,
            json,
        } => commands::batch::run(
            file,
            value_column,
            unit_column,
            codes,
            output,
            json,
            cli.verbose,
        ),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

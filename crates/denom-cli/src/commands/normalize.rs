//! Normalize command - normalize a single value/unit pair.

use colored::Colorize;
use denom::{Normalizer, NormalizerConfig};

pub fn run(
    value: String,
    unit: Option<String>,
    codes: Vec<String>,
    json_output: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let normalizer = Normalizer::with_config(NormalizerConfig {
        extra_currency_codes: codes,
    });

    let result = normalizer.normalize(value.as_str(), unit.as_deref());

    if json_output {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    match &result.classifier {
        Some(name) => {
            println!(
                "{} {}",
                result.value.white().bold(),
                result.unit.as_deref().unwrap_or("").cyan()
            );
            if verbose {
                println!("{} {}", "matched:".dimmed(), name);
            }
        }
        None => {
            println!(
                "{} {}",
                result.value,
                result.unit.as_deref().unwrap_or("")
            );
            if verbose {
                println!("{}", "no classifier matched; input returned unchanged".dimmed());
            }
        }
    }

    Ok(())
}

//! Example: Normalize a batch of extracted value/unit pairs with Denom.
//!
//! Usage:
//!   cargo run --example normalize
//!   cargo run --example normalize -- <value> [unit]

use std::env;

use denom::{Normalizer, NormalizerConfig};

fn main() {
    let args: Vec<String> = env::args().collect();

    let normalizer = Normalizer::with_config(NormalizerConfig {
        extra_currency_codes: vec!["GBP".to_string()],
    });

    // Normalize a pair given on the command line, if any.
    if args.len() > 1 {
        let value = &args[1];
        let unit = args.get(2).map(String::as_str);
        let result = normalizer.normalize(value.as_str(), unit);
        println!(
            "{} {}  ->  {} {}",
            value,
            unit.unwrap_or("-"),
            result.value,
            result.unit.as_deref().unwrap_or("-"),
        );
        return;
    }

    // Otherwise walk a sample of pairs as an extraction pipeline would
    // hand them over.
    let samples: &[(&str, Option<&str>)] = &[
        ("4,000", Some("million USD")),
        ("4_000_000_000", Some("USD")),
        ("1_500_000", Some("GBP")),
        ("4100", Some("X")),
        ("4x", None),
        ("4_100_000_000", Some("ea")),
        ("4.1", Some("B people")),
        ("3.500", None),
        ("up", Some("up")),
    ];

    println!("{:<28} {:<24} {}", "input", "normalized", "classifier");
    println!("{}", "-".repeat(70));

    for (value, unit) in samples {
        let result = normalizer.normalize(*value, *unit);
        println!(
            "{:<28} {:<24} {}",
            format!("{} {}", value, unit.unwrap_or("-")),
            format!("{} {}", result.value, result.unit.as_deref().unwrap_or("-")),
            result.classifier.as_deref().unwrap_or("(pass-through)"),
        );
    }
}

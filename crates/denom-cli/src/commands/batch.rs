//! Batch command - normalize a CSV of extracted value/unit pairs.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use colored::Colorize;
use denom::{Normalized, Normalizer, NormalizerConfig};

pub fn run(
    file: PathBuf,
    value_column: String,
    unit_column: String,
    codes: Vec<String>,
    output: Option<PathBuf>,
    json_output: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut reader = csv::Reader::from_path(&file)?;
    let headers = reader.headers()?.clone();

    let value_idx = headers
        .iter()
        .position(|h| h == value_column)
        .ok_or_else(|| {
            format!(
                "Column '{}' not found in {} (available: {})",
                value_column,
                file.display(),
                headers.iter().collect::<Vec<_>>().join(", ")
            )
        })?;
    // The unit column is optional: a file of bare figures is valid input.
    let unit_idx = headers.iter().position(|h| h == unit_column);

    let normalizer = Normalizer::with_config(NormalizerConfig {
        extra_currency_codes: codes,
    });

    let mut rows: Vec<(csv::StringRecord, Normalized)> = Vec::new();
    let mut matched = 0usize;

    for record in reader.records() {
        let record = record?;
        let raw_value = record.get(value_idx).unwrap_or("");
        // An empty unit cell means the extractor found no unit.
        let raw_unit = unit_idx
            .and_then(|idx| record.get(idx))
            .filter(|unit| !unit.is_empty());

        let result = normalizer.normalize(raw_value, raw_unit);
        if result.classifier.is_some() {
            matched += 1;
        }
        rows.push((record, result));
    }

    let writer: Box<dyn Write> = match &output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };

    if json_output {
        write_json(writer, value_idx, unit_idx, &rows)?;
    } else {
        write_csv(writer, &headers, &rows)?;
    }

    if verbose {
        eprintln!(
            "{} {}/{} rows matched a classifier",
            "Normalized:".green().bold(),
            matched,
            rows.len()
        );
    }

    Ok(())
}

/// Write the input rows with appended normalized columns.
fn write_csv(
    writer: Box<dyn Write>,
    headers: &csv::StringRecord,
    rows: &[(csv::StringRecord, Normalized)],
) -> Result<(), Box<dyn std::error::Error>> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    let mut header_row = headers.clone();
    header_row.push_field("normalized_value");
    header_row.push_field("normalized_unit");
    csv_writer.write_record(&header_row)?;

    for (record, result) in rows {
        let mut row = record.clone();
        row.push_field(&result.value);
        row.push_field(result.unit.as_deref().unwrap_or(""));
        csv_writer.write_record(&row)?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Write one JSON object per row, original pair alongside the result.
fn write_json(
    mut writer: Box<dyn Write>,
    value_idx: usize,
    unit_idx: Option<usize>,
    rows: &[(csv::StringRecord, Normalized)],
) -> Result<(), Box<dyn std::error::Error>> {
    let entries: Vec<serde_json::Value> = rows
        .iter()
        .map(|(record, result)| {
            serde_json::json!({
                "value": record.get(value_idx).unwrap_or(""),
                "unit": unit_idx.and_then(|idx| record.get(idx)),
                "normalized": result,
            })
        })
        .collect();

    writeln!(writer, "{}", serde_json::to_string_pretty(&entries)?)?;
    Ok(())
}

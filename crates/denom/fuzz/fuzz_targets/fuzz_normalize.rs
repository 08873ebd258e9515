//! Fuzz target for the full normalization dispatcher.
//!
//! The dispatcher must never panic: any input either matches a classifier
//! or passes through unchanged.

#![no_main]

use denom::Normalizer;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let normalizer = Normalizer::new();

    let (value_bytes, unit_bytes) = data.split_at(data.len() / 2);

    if let (Ok(value), Ok(unit)) = (
        std::str::from_utf8(value_bytes),
        std::str::from_utf8(unit_bytes),
    ) {
        let _ = normalizer.normalize(value, None);

        // Pass-through must reproduce the input exactly.
        let result = normalizer.normalize(value, Some(unit));
        if result.classifier.is_none() {
            assert_eq!(result.value, value);
            assert_eq!(result.unit.as_deref(), Some(unit));
        }
    }
});

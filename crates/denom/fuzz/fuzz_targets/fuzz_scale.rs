//! Fuzz target for the scale resolver and magnitude rescaler.
//!
//! This fuzzer tests that both operations:
//! 1. Never panic on any UTF-8 input
//! 2. Fail only through the InvalidValue error path

#![no_main]

use denom::{rescale_to_magnitude, resolve_unit_scale};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Split the raw bytes so both arguments see arbitrary content.
    let (value_bytes, unit_bytes) = data.split_at(data.len() / 2);

    if let (Ok(value), Ok(unit)) = (
        std::str::from_utf8(value_bytes),
        std::str::from_utf8(unit_bytes),
    ) {
        let _ = resolve_unit_scale(value, unit);
        let _ = rescale_to_magnitude(value);
    }

    // Even with invalid UTF-8, a lossy conversion should work.
    let lossy = String::from_utf8_lossy(data);
    let _ = rescale_to_magnitude(lossy.as_ref());
});

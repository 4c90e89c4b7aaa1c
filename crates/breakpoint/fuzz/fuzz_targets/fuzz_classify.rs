//! Fuzz target for MIC classification.
//!
//! This fuzzer tests that classification:
//! 1. Never panics on any UTF-8 input
//! 2. Always agrees with its explanation
//! 3. Treats unparseable text as invalid before any lookup

#![no_main]

use breakpoint::{Classification, RuleTable, classify, explain, parse_mic};
use libfuzzer_sys::fuzz_target;

const TABLE: &str = r#"{"E. coli": {"Ampicillin": [
    {"min": 0, "max": 8, "category": "Susceptible"},
    {"min": 8.01, "max": 16, "category": "Intermediate"},
    {"min": 16.01, "max": 999, "category": "Resistant"}
]}}"#;

fuzz_target!(|data: &[u8]| {
    let table = RuleTable::from_json_str(TABLE).unwrap();
    let input = String::from_utf8_lossy(data);

    let result = classify(&table, "E. coli", "Ampicillin", &input);
    assert_eq!(explain(&table, "E. coli", "Ampicillin", &input).classification, result);

    if parse_mic(&input).is_none() {
        assert_eq!(result, Classification::InvalidMic);
    }
});

//! Fuzz target for rule table loading.
//!
//! This fuzzer tests that the loader never panics on arbitrary bytes and
//! that every accepted table can be linted and queried.

#![no_main]

use breakpoint::{RuleTable, classify, lint};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(table) = RuleTable::from_json_str(input) {
        let _ = lint(&table);
        for (organism, antibiotic, _) in table.entries() {
            let _ = classify(&table, organism, antibiotic, "1");
        }
    }
});

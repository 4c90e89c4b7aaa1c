//! Breakpoint: MIC interpretation against a static breakpoint table.
//!
//! A rule table maps each organism to its antibiotics, and each antibiotic
//! to an ordered list of inclusive MIC ranges tagged with a clinical
//! category (Susceptible, Intermediate, Resistant, ...). Classifying a MIC
//! is a lookup of that list followed by a first-match scan.
//!
//! # Core Principles
//!
//! - **Load once**: the table is read and validated at startup, then never mutated
//! - **Pure lookups**: the same table and inputs always give the same result
//! - **No per-request errors**: bad MIC text and unmatched values are outcomes, not failures
//!
//! # Example
//!
//! ```no_run
//! use breakpoint::{RuleTable, classify};
//!
//! let table = RuleTable::load("final_mic_rule_dict.json").unwrap();
//! let result = classify(&table, "E. coli", "Ampicillin", "8");
//!
//! println!("Result: {}", result);
//! ```

pub mod classify;
pub mod error;
pub mod rules;

pub use classify::{
    Classification, ClassificationRequest, Explanation, INVALID_MIC, NOT_DEFINED, classify,
    explain, parse_mic,
};
pub use error::{BreakpointError, Result};
pub use rules::{RangeRule, RuleIssue, RuleTable, Severity, lint};

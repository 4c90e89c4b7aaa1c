//! Breakpoint rule tables: data model, loading, and lint.

mod bound;
pub mod lint;
mod loader;
mod table;

pub use lint::{IssueKind, RuleIssue, Severity, lint};
pub use table::{AntibioticRules, RangeRule, RuleTable};

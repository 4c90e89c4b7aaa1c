//! Data-quality checks over a loaded rule table.
//!
//! Lint findings describe how the table will behave; they never change it.
//! Classification keeps resolving overlaps by list order whatever is reported
//! here.

use serde::{Deserialize, Serialize};

use super::table::RuleTable;

/// Severity level of a lint finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Worth knowing, behavior is still well defined.
    Info,
    /// Part of the table can never produce a result.
    Warning,
}

impl Severity {
    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Info => "Info",
            Severity::Warning => "Warning",
        }
    }
}

/// What kind of problem a finding reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum IssueKind {
    /// `min > max`, the rule matches no value.
    InvertedRange { rule: usize },
    /// A bound is NaN, the rule matches no value.
    NanBound { rule: usize },
    /// Two rules share values; `earlier` wins for those values.
    Overlap { earlier: usize, rule: usize },
    /// `rule` lies entirely inside `earlier` and is never reached.
    Shadowed { earlier: usize, rule: usize },
    /// No rules at all; every MIC is undefined for this pair.
    EmptyRules,
}

/// A single lint finding for one (organism, antibiotic) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleIssue {
    pub organism: String,
    pub antibiotic: String,
    pub severity: Severity,
    #[serde(flatten)]
    pub kind: IssueKind,
}

impl RuleIssue {
    fn new(organism: &str, antibiotic: &str, kind: IssueKind) -> Self {
        let severity = match kind {
            IssueKind::InvertedRange { .. }
            | IssueKind::NanBound { .. }
            | IssueKind::Shadowed { .. } => Severity::Warning,
            IssueKind::Overlap { .. } | IssueKind::EmptyRules => Severity::Info,
        };
        Self {
            organism: organism.to_string(),
            antibiotic: antibiotic.to_string(),
            severity,
            kind,
        }
    }

    /// One-line description of the finding.
    pub fn describe(&self) -> String {
        match self.kind {
            IssueKind::InvertedRange { rule } => {
                format!("rule {} has min greater than max and never matches", rule)
            }
            IssueKind::NanBound { rule } => {
                format!("rule {} has a NaN bound and never matches", rule)
            }
            IssueKind::Overlap { earlier, rule } => {
                format!("rule {} overlaps rule {}; rule {} wins", rule, earlier, earlier)
            }
            IssueKind::Shadowed { earlier, rule } => {
                format!("rule {} is covered by rule {} and never matches", rule, earlier)
            }
            IssueKind::EmptyRules => "no range rules defined".to_string(),
        }
    }
}

impl std::fmt::Display for RuleIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] {} / {}: {}",
            self.severity.label(),
            self.organism,
            self.antibiotic,
            self.describe()
        )
    }
}

/// Inspect every (organism, antibiotic) pair and report suspicious rules.
///
/// Findings are returned in table order.
pub fn lint(table: &RuleTable) -> Vec<RuleIssue> {
    let mut issues = Vec::new();

    for (organism, antibiotic, rules) in table.entries() {
        if rules.is_empty() {
            issues.push(RuleIssue::new(organism, antibiotic, IssueKind::EmptyRules));
            continue;
        }

        for (index, rule) in rules.iter().enumerate() {
            if rule.has_nan_bound() {
                issues.push(RuleIssue::new(
                    organism,
                    antibiotic,
                    IssueKind::NanBound { rule: index },
                ));
                continue;
            }

            if rule.is_inverted() {
                issues.push(RuleIssue::new(
                    organism,
                    antibiotic,
                    IssueKind::InvertedRange { rule: index },
                ));
                continue;
            }

            for (earlier, previous) in rules[..index].iter().enumerate() {
                if previous.is_inverted() || previous.has_nan_bound() {
                    continue;
                }

                if previous.covers(rule) {
                    issues.push(RuleIssue::new(
                        organism,
                        antibiotic,
                        IssueKind::Shadowed {
                            earlier,
                            rule: index,
                        },
                    ));
                    break;
                }

                if previous.overlaps(rule) {
                    issues.push(RuleIssue::new(
                        organism,
                        antibiotic,
                        IssueKind::Overlap {
                            earlier,
                            rule: index,
                        },
                    ));
                }
            }
        }
    }

    issues
}

//! Range matching against a rule table.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::rules::{RangeRule, RuleTable};

use super::mic::parse_mic;
use super::outcome::{Classification, Explanation};

/// One classification query as submitted by a user.
///
/// Every field defaults to the empty string, matching an unselected form
/// control.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationRequest {
    #[serde(default)]
    pub organism: String,
    #[serde(default)]
    pub antibiotic: String,
    #[serde(default)]
    pub mic: String,
}

impl ClassificationRequest {
    /// Create a new request.
    pub fn new(
        organism: impl Into<String>,
        antibiotic: impl Into<String>,
        mic: impl Into<String>,
    ) -> Self {
        Self {
            organism: organism.into(),
            antibiotic: antibiotic.into(),
            mic: mic.into(),
        }
    }

    /// Classify this request against `table`.
    pub fn classify(&self, table: &RuleTable) -> Classification {
        classify(table, &self.organism, &self.antibiotic, &self.mic)
    }

    /// Classify this request and report how the result was reached.
    pub fn explain(&self, table: &RuleTable) -> Explanation {
        explain(table, &self.organism, &self.antibiotic, &self.mic)
    }
}

/// Classify a raw MIC for an organism and antibiotic.
///
/// The MIC text is parsed first; if it is not a number the result is
/// [`Classification::InvalidMic`] whatever the other inputs are. Otherwise
/// the first rule (in table order) whose inclusive range holds the value
/// supplies the category. Unknown organisms or antibiotics and values outside
/// every range give [`Classification::NotDefined`].
///
/// # Example
///
/// ```
/// use breakpoint::{Classification, RuleTable, classify};
///
/// let table = RuleTable::from_json_str(
///     r#"{"E. coli": {"Ampicillin": [{"min": 0, "max": 8, "category": "Susceptible"}]}}"#,
/// )
/// .unwrap();
///
/// assert_eq!(
///     classify(&table, "E. coli", "Ampicillin", "8"),
///     Classification::Category("Susceptible".into())
/// );
/// assert_eq!(classify(&table, "E. coli", "Ampicillin", "xyz"), Classification::InvalidMic);
/// ```
pub fn classify(
    table: &RuleTable,
    organism: &str,
    antibiotic: &str,
    raw_mic: &str,
) -> Classification {
    let classification = match parse_mic(raw_mic) {
        Some(value) => classify_value(table, organism, antibiotic, value),
        None => Classification::InvalidMic,
    };
    debug!(organism, antibiotic, raw_mic, result = %classification, "classified MIC");
    classification
}

/// Classify an already-parsed MIC value.
pub fn classify_value(
    table: &RuleTable,
    organism: &str,
    antibiotic: &str,
    value: f64,
) -> Classification {
    match first_match(table.rules_for(organism, antibiotic), value) {
        Some((_, rule)) => Classification::Category(rule.category.clone()),
        None => Classification::NotDefined,
    }
}

/// Same as [`classify`], with the parsed value and the winning rule.
pub fn explain(
    table: &RuleTable,
    organism: &str,
    antibiotic: &str,
    raw_mic: &str,
) -> Explanation {
    let rules = table.rules_for(organism, antibiotic);

    let Some(value) = parse_mic(raw_mic) else {
        return Explanation {
            mic: None,
            candidates: rules.len(),
            matched_index: None,
            matched_rule: None,
            classification: Classification::InvalidMic,
        };
    };

    match first_match(rules, value) {
        Some((index, rule)) => Explanation {
            mic: Some(value),
            candidates: rules.len(),
            matched_index: Some(index),
            matched_rule: Some(rule.clone()),
            classification: Classification::Category(rule.category.clone()),
        },
        None => Explanation {
            mic: Some(value),
            candidates: rules.len(),
            matched_index: None,
            matched_rule: None,
            classification: Classification::NotDefined,
        },
    }
}

/// Find the first rule containing `value`, with its position.
///
/// The scan stops at the first hit, so an earlier rule always beats a later
/// overlapping one.
pub fn first_match(rules: &[RangeRule], value: f64) -> Option<(usize, &RangeRule)> {
    rules.iter().enumerate().find(|(_, rule)| rule.contains(value))
}

//! In-memory rule table: organism → antibiotic → ordered range rules.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// An inclusive numeric MIC interval mapped to a clinical category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeRule {
    /// Lower bound (inclusive).
    #[serde(with = "crate::rules::bound")]
    pub min: f64,
    /// Upper bound (inclusive).
    #[serde(with = "crate::rules::bound")]
    pub max: f64,
    /// Category reported when a MIC falls in `[min, max]`.
    pub category: String,
}

impl RangeRule {
    /// Create a new range rule.
    pub fn new(min: f64, max: f64, category: impl Into<String>) -> Self {
        Self {
            min,
            max,
            category: category.into(),
        }
    }

    /// Whether `value` lies within the rule, both bounds included.
    ///
    /// An inverted rule (`min > max`) contains nothing. NaN is never contained.
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Whether two rules share at least one value.
    pub fn overlaps(&self, other: &RangeRule) -> bool {
        self.min <= other.max && other.min <= self.max
    }

    /// Whether every value of `other` is also in `self`.
    pub fn covers(&self, other: &RangeRule) -> bool {
        self.min <= other.min && other.max <= self.max
    }

    /// Whether `min > max`.
    pub fn is_inverted(&self) -> bool {
        self.min > self.max
    }

    /// Whether either bound is NaN, which makes the rule match nothing.
    pub fn has_nan_bound(&self) -> bool {
        self.min.is_nan() || self.max.is_nan()
    }
}

/// Antibiotic name → ordered range rules, for one organism.
pub type AntibioticRules = IndexMap<String, Vec<RangeRule>>;

/// Immutable breakpoint table keyed by organism, then antibiotic.
///
/// Organisms and antibiotics keep the order in which they appeared in the
/// source resource. Range rules keep their list order, which decides ties
/// between overlapping ranges.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleTable {
    organisms: IndexMap<String, AntibioticRules>,
}

impl RuleTable {
    /// Build a table from an already-assembled map.
    ///
    /// No validation is performed; use [`RuleTable::from_json_str`] or
    /// [`RuleTable::load`] for untrusted input.
    pub fn from_map(organisms: IndexMap<String, AntibioticRules>) -> Self {
        Self { organisms }
    }

    /// The underlying organism map.
    pub fn as_map(&self) -> &IndexMap<String, AntibioticRules> {
        &self.organisms
    }

    /// Range rules for an (organism, antibiotic) pair.
    ///
    /// An unknown organism or antibiotic resolves to an empty slice, so a
    /// lookup miss is reported the same way as a MIC outside every range.
    /// This is the single place that decides how unknown keys are treated.
    pub fn rules_for(&self, organism: &str, antibiotic: &str) -> &[RangeRule] {
        self.organisms
            .get(organism)
            .and_then(|antibiotics| antibiotics.get(antibiotic))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether the organism is present in the table.
    pub fn contains_organism(&self, organism: &str) -> bool {
        self.organisms.contains_key(organism)
    }

    /// Antibiotic map for one organism, if known.
    pub fn antibiotics_of(&self, organism: &str) -> Option<&AntibioticRules> {
        self.organisms.get(organism)
    }

    /// Organism names in table order.
    pub fn organisms(&self) -> impl Iterator<Item = &str> {
        self.organisms.keys().map(String::as_str)
    }

    /// Antibiotic names for an organism in table order (empty if unknown).
    pub fn antibiotics(&self, organism: &str) -> impl Iterator<Item = &str> {
        self.organisms
            .get(organism)
            .into_iter()
            .flat_map(|antibiotics| antibiotics.keys().map(String::as_str))
    }

    /// Iterate every (organism, antibiotic, rules) entry in table order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str, &[RangeRule])> {
        self.organisms.iter().flat_map(|(organism, antibiotics)| {
            antibiotics.iter().map(move |(antibiotic, rules)| {
                (organism.as_str(), antibiotic.as_str(), rules.as_slice())
            })
        })
    }

    /// Projection of the table keys: organism → antibiotic names.
    ///
    /// This is what the form page ships to the browser to refill the
    /// antibiotic dropdown when the organism changes.
    pub fn antibiotic_index(&self) -> IndexMap<&str, Vec<&str>> {
        self.organisms
            .iter()
            .map(|(organism, antibiotics)| {
                (
                    organism.as_str(),
                    antibiotics.keys().map(String::as_str).collect(),
                )
            })
            .collect()
    }

    /// Number of organisms.
    pub fn organism_count(&self) -> usize {
        self.organisms.len()
    }

    /// Number of (organism, antibiotic) pairs.
    pub fn pair_count(&self) -> usize {
        self.organisms.values().map(IndexMap::len).sum()
    }

    /// Total number of range rules.
    pub fn rule_count(&self) -> usize {
        self.organisms
            .values()
            .flat_map(IndexMap::values)
            .map(Vec::len)
            .sum()
    }

    /// Whether the table has no organisms.
    pub fn is_empty(&self) -> bool {
        self.organisms.is_empty()
    }

    /// Serialize the table back to its JSON resource form.
    pub fn to_json_pretty(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RuleTable {
        let mut ampicillin = IndexMap::new();
        ampicillin.insert(
            "Ampicillin".to_string(),
            vec![
                RangeRule::new(0.0, 8.0, "Susceptible"),
                RangeRule::new(8.01, 16.0, "Intermediate"),
            ],
        );
        ampicillin.insert("Cefazolin".to_string(), vec![]);

        let mut organisms = IndexMap::new();
        organisms.insert("E. coli".to_string(), ampicillin);
        organisms.insert("S. aureus".to_string(), IndexMap::new());
        RuleTable::from_map(organisms)
    }

    #[test]
    fn test_contains_is_inclusive() {
        let rule = RangeRule::new(4.0, 8.0, "S");
        assert!(rule.contains(4.0));
        assert!(rule.contains(8.0));
        assert!(!rule.contains(3.999));
        assert!(!rule.contains(8.001));
        assert!(!rule.contains(f64::NAN));
    }

    #[test]
    fn test_inverted_rule_contains_nothing() {
        let rule = RangeRule::new(8.0, 4.0, "S");
        assert!(rule.is_inverted());
        assert!(!rule.contains(6.0));
        assert!(!rule.contains(4.0));
    }

    #[test]
    fn test_overlaps_and_covers() {
        let a = RangeRule::new(0.0, 10.0, "A");
        let b = RangeRule::new(5.0, 15.0, "B");
        let c = RangeRule::new(2.0, 3.0, "C");
        let d = RangeRule::new(10.0, 12.0, "D");

        assert!(a.overlaps(&b));
        assert!(a.overlaps(&d));
        assert!(!c.overlaps(&d));
        assert!(a.covers(&c));
        assert!(!a.covers(&b));
    }

    #[test]
    fn test_rules_for_unknown_keys_is_empty() {
        let table = sample();
        assert_eq!(table.rules_for("E. coli", "Ampicillin").len(), 2);
        assert!(table.rules_for("E. coli", "Vancomycin").is_empty());
        assert!(table.rules_for("Unknown Bug", "Ampicillin").is_empty());
        assert!(table.rules_for("", "").is_empty());
    }

    #[test]
    fn test_enumeration_keeps_order() {
        let table = sample();
        let organisms: Vec<_> = table.organisms().collect();
        assert_eq!(organisms, vec!["E. coli", "S. aureus"]);

        let antibiotics: Vec<_> = table.antibiotics("E. coli").collect();
        assert_eq!(antibiotics, vec!["Ampicillin", "Cefazolin"]);
        assert_eq!(table.antibiotics("nope").count(), 0);
    }

    #[test]
    fn test_counts() {
        let table = sample();
        assert_eq!(table.organism_count(), 2);
        assert_eq!(table.pair_count(), 2);
        assert_eq!(table.rule_count(), 2);
        assert!(!table.is_empty());
    }

    #[test]
    fn test_antibiotic_index_serializes_as_object() {
        let table = sample();
        let json = serde_json::to_value(table.antibiotic_index()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "E. coli": ["Ampicillin", "Cefazolin"],
                "S. aureus": []
            })
        );
    }

    #[test]
    fn test_non_finite_bounds_serialize_as_strings() {
        let rule = RangeRule::new(16.01, f64::INFINITY, "Resistant");
        let json = serde_json::to_value(&rule).unwrap();
        assert_eq!(json["min"], 16.01);
        assert_eq!(json["max"], "Infinity");

        let back: RangeRule = serde_json::from_value(json).unwrap();
        assert_eq!(back, rule);
        assert!(back.contains(1e300));
    }

    #[test]
    fn test_nan_bound_contains_nothing() {
        let rule = RangeRule::new(f64::NAN, 8.0, "Susceptible");
        assert!(rule.has_nan_bound());
        assert!(!rule.is_inverted());
        assert!(!rule.contains(4.0));
        assert!(!RangeRule::new(0.0, 8.0, "S").has_nan_bound());
    }
}

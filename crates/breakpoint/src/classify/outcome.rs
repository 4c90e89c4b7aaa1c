use serde::{Serialize, Serializer};

use crate::rules::RangeRule;

/// Result text when no range rule contains the MIC.
pub const NOT_DEFINED: &str = "Value not defined by CLSI";

/// Result text when the MIC cannot be read as a number.
pub const INVALID_MIC: &str = "Invalid MIC input";

/// Outcome of classifying one MIC value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Classification {
    /// A category taken from the matching range rule.
    Category(String),
    /// The MIC parsed, but no rule contains it (or the organism/antibiotic
    /// pair is not in the table).
    NotDefined,
    /// The MIC text is not a number.
    InvalidMic,
}

impl Classification {
    /// The text shown to users: the category, or a fixed sentinel.
    pub fn as_str(&self) -> &str {
        match self {
            Classification::Category(category) => category.as_str(),
            Classification::NotDefined => NOT_DEFINED,
            Classification::InvalidMic => INVALID_MIC,
        }
    }

    /// Short machine-readable label for the outcome kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Classification::Category(_) => "category",
            Classification::NotDefined => "not_defined",
            Classification::InvalidMic => "invalid_mic",
        }
    }

    /// The matched category, if any.
    pub fn category(&self) -> Option<&str> {
        match self {
            Classification::Category(category) => Some(category.as_str()),
            _ => None,
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Classification {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Step-by-step account of a classification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Explanation {
    /// Parsed MIC, or `None` if the text was not a number.
    pub mic: Option<f64>,
    /// Number of rules defined for the (organism, antibiotic) pair.
    pub candidates: usize,
    /// Position of the winning rule in the pair's list.
    pub matched_index: Option<usize>,
    /// Copy of the winning rule.
    pub matched_rule: Option<RangeRule>,
    /// Final outcome.
    pub classification: Classification,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_sentinels() {
        assert_eq!(Classification::NotDefined.to_string(), "Value not defined by CLSI");
        assert_eq!(Classification::InvalidMic.to_string(), "Invalid MIC input");
        assert_eq!(
            Classification::Category("Resistant".into()).to_string(),
            "Resistant"
        );
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_string(&Classification::InvalidMic).unwrap();
        assert_eq!(json, "\"Invalid MIC input\"");
    }

    #[test]
    fn test_category_accessor() {
        assert_eq!(
            Classification::Category("Susceptible".into()).category(),
            Some("Susceptible")
        );
        assert_eq!(Classification::NotDefined.category(), None);
        assert_eq!(Classification::InvalidMic.kind(), "invalid_mic");
    }
}

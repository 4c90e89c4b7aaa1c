//! Loading and validating rule tables from JSON resources.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::debug;

use crate::error::{BreakpointError, Result};

use super::bound::quote_non_finite;
use super::table::RuleTable;

impl RuleTable {
    /// Load a rule table from a JSON file.
    ///
    /// The file must hold an object of organisms, each an object of
    /// antibiotics, each a list of `{"min", "max", "category"}` rules.
    /// Bounds may use the `Infinity`, `-Infinity` and `NaN` literals that
    /// Python's `json` module writes.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use breakpoint::RuleTable;
    ///
    /// let table = RuleTable::load("final_mic_rule_dict.json").unwrap();
    /// println!("Organisms: {}", table.organism_count());
    /// ```
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let file = File::open(path).map_err(|source| BreakpointError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let table = Self::from_reader(BufReader::new(file))?;
        debug!(
            path = %path.display(),
            organisms = table.organism_count(),
            pairs = table.pair_count(),
            rules = table.rule_count(),
            "loaded rule table"
        );
        Ok(table)
    }

    /// Parse and validate a rule table from any reader.
    pub fn from_reader(mut reader: impl Read) -> Result<Self> {
        let mut json = String::new();
        reader
            .read_to_string(&mut json)
            .map_err(serde_json::Error::io)?;
        Self::from_json_str(&json)
    }

    /// Parse and validate a rule table from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let table: RuleTable = serde_json::from_str(&quote_non_finite(json))?;
        table.validate()?;
        Ok(table)
    }

    /// Check the structural constraints a table must meet before serving.
    ///
    /// Range ordering (`min <= max`), NaN bounds and overlaps are not
    /// checked here; see [`crate::rules::lint`] for those.
    pub fn validate(&self) -> Result<()> {
        if self.is_empty() {
            return Err(BreakpointError::InvalidTable(
                "table must contain at least one organism".into(),
            ));
        }

        for (organism, antibiotics) in self.as_map() {
            if organism.is_empty() {
                return Err(BreakpointError::InvalidTable(
                    "organism name must not be empty".into(),
                ));
            }

            for (antibiotic, rules) in antibiotics {
                if antibiotic.is_empty() {
                    return Err(BreakpointError::InvalidTable(format!(
                        "organism '{}' has an antibiotic with an empty name",
                        organism
                    )));
                }

                for (index, rule) in rules.iter().enumerate() {
                    if rule.category.is_empty() {
                        return Err(BreakpointError::InvalidTable(format!(
                            "'{}' / '{}' rule {} has an empty category",
                            organism, antibiotic, index
                        )));
                    }
                }
            }
        }

        Ok(())
    }
}

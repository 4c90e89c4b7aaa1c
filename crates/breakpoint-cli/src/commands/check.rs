//! Check command - validate a rule table and lint its ranges.

use std::path::PathBuf;

use breakpoint::{RuleTable, Severity, lint};
use colored::Colorize;

pub fn run(
    rules_path: PathBuf,
    json_output: bool,
    strict: bool,
    _verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    // Structural problems surface here as a load error.
    let table = RuleTable::load(&rules_path)?;
    let issues = lint(&table);
    let warnings = issues
        .iter()
        .filter(|i| i.severity == Severity::Warning)
        .count();

    if json_output {
        let report = serde_json::json!({
            "file": rules_path.display().to_string(),
            "organisms": table.organism_count(),
            "pairs": table.pair_count(),
            "rules": table.rule_count(),
            "warnings": warnings,
            "issues": issues,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "{} {}",
            "Checked".cyan().bold(),
            rules_path.display().to_string().white()
        );
        println!(
            "  {} organisms, {} antibiotic pairs, {} ranges",
            table.organism_count(),
            table.pair_count(),
            table.rule_count()
        );
        println!();

        if issues.is_empty() {
            println!("{}", "No issues found.".green().bold());
        } else {
            for issue in &issues {
                let label = format!("{:<8}", issue.severity.label());
                let label = match issue.severity {
                    Severity::Warning => label.yellow().bold(),
                    Severity::Info => label.blue(),
                };
                println!(
                    "  {} {} / {}: {}",
                    label,
                    issue.organism,
                    issue.antibiotic,
                    issue.describe()
                );
            }
            println!();
            println!(
                "{} warnings, {} info",
                warnings,
                issues.len() - warnings
            );
        }
    }

    if strict && warnings > 0 {
        return Err(format!("{} warning(s) found in {}", warnings, rules_path.display()).into());
    }

    Ok(())
}

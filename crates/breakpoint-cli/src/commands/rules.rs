//! Rules command - inspect the organisms and ranges in a table.

use std::path::PathBuf;

use breakpoint::RuleTable;
use colored::Colorize;

pub fn run(
    rules_path: PathBuf,
    organism: Option<String>,
    json_output: bool,
    _verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let table = RuleTable::load(&rules_path)?;

    let Some(organism) = organism else {
        return list_organisms(&table, json_output);
    };

    let Some(antibiotics) = table.antibiotics_of(&organism) else {
        return Err(format!(
            "Organism not found: {}\nRun 'breakpoint rules' to list organisms.",
            organism
        )
        .into());
    };

    if json_output {
        println!("{}", serde_json::to_string_pretty(antibiotics)?);
        return Ok(());
    }

    println!("{} {}", "Breakpoints for".cyan().bold(), organism.white());
    println!();

    for (antibiotic, rules) in antibiotics {
        println!("{}", antibiotic.yellow().bold());
        if rules.is_empty() {
            println!("  {}", "(no ranges)".dimmed());
        }
        for rule in rules {
            println!("  {:>10} - {:<10} {}", rule.min, rule.max, rule.category);
        }
        println!();
    }

    Ok(())
}

fn list_organisms(table: &RuleTable, json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json_output {
        println!("{}", serde_json::to_string_pretty(&table.antibiotic_index())?);
        return Ok(());
    }

    println!(
        "{} ({} organisms, {} antibiotic pairs, {} ranges)",
        "Rule table".cyan().bold(),
        table.organism_count(),
        table.pair_count(),
        table.rule_count()
    );
    println!();

    for organism in table.organisms() {
        println!(
            "  {} {}",
            organism.white(),
            format!("({} antibiotics)", table.antibiotics(organism).count()).dimmed()
        );
    }

    Ok(())
}

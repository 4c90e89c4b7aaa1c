//! Example: classify a MIC against a rule table file.
//!
//! Usage:
//!   cargo run --example classify -- <rules.json> <organism> <antibiotic> <mic>
//!
//! Example:
//!   cargo run --example classify -- data/sample_rules.json "Escherichia coli" Ampicillin 12

use std::env;

use breakpoint::{RuleTable, explain, lint};

fn main() -> breakpoint::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 5 {
        eprintln!("Usage: cargo run --example classify -- <rules.json> <organism> <antibiotic> <mic>");
        eprintln!("\nExample:");
        eprintln!(
            "  cargo run --example classify -- data/sample_rules.json \"Escherichia coli\" Ampicillin 12"
        );
        std::process::exit(1);
    }

    let table = RuleTable::load(&args[1])?;
    let (organism, antibiotic, mic) = (&args[2], &args[3], &args[4]);

    let separator = "=".repeat(60);
    println!("{}", separator);
    println!("{} / {} / MIC {}", organism, antibiotic, mic);
    println!("{}", separator);
    println!();

    println!("## Table");
    println!("  Organisms: {}", table.organism_count());
    println!("  Pairs: {}", table.pair_count());
    println!("  Rules: {}", table.rule_count());
    println!();

    println!("## Ranges");
    let rules = table.rules_for(organism, antibiotic);
    if rules.is_empty() {
        println!("  (none defined)");
    }
    for (i, rule) in rules.iter().enumerate() {
        println!("  {}. [{}, {}] -> {}", i, rule.min, rule.max, rule.category);
    }
    println!();

    let explanation = explain(&table, organism, antibiotic, mic);
    println!("## Result");
    println!("  {}", explanation.classification);
    if let Some(index) = explanation.matched_index {
        println!("  Matched rule {}", index);
    }
    println!();

    let issues = lint(&table);
    if !issues.is_empty() {
        println!("## Lint ({} findings)", issues.len());
        for issue in &issues {
            println!("  {}", issue);
        }
        println!();
    }

    println!("{}", separator);

    Ok(())
}

//! Classify command - interpret one MIC from the command line.

use std::path::PathBuf;

use breakpoint::{Classification, ClassificationRequest, RuleTable};
use colored::Colorize;

pub fn run(
    rules_path: PathBuf,
    request: ClassificationRequest,
    json_output: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let table = RuleTable::load(&rules_path)?;
    let explanation = request.explain(&table);

    if json_output {
        let output = serde_json::json!({
            "organism": request.organism,
            "antibiotic": request.antibiotic,
            "mic": request.mic,
            "result": explanation.classification,
            "kind": explanation.classification.kind(),
            "matched_index": explanation.matched_index,
            "matched_rule": explanation.matched_rule,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let result = explanation.classification.to_string();
    let colored_result = match &explanation.classification {
        Classification::Category(category) => match category.as_str() {
            "Susceptible" => result.green().bold(),
            "Intermediate" => result.yellow().bold(),
            "Resistant" => result.red().bold(),
            _ => result.white().bold(),
        },
        Classification::NotDefined | Classification::InvalidMic => result.dimmed(),
    };
    println!("{}", colored_result);

    if verbose {
        println!();
        println!("  Organism:   {}", request.organism);
        println!("  Antibiotic: {}", request.antibiotic);
        match explanation.mic {
            Some(mic) => println!("  MIC:        {}", mic),
            None => println!("  MIC:        {} (not a number)", request.mic),
        }
        println!("  Ranges:     {}", explanation.candidates);
        if let (Some(index), Some(rule)) = (explanation.matched_index, &explanation.matched_rule) {
            println!(
                "  Matched:    rule {} [{}, {}]",
                index, rule.min, rule.max
            );
        }
    }

    Ok(())
}

//! Integration tests for breakpoint.

use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

use breakpoint::{BreakpointError, Classification, RuleTable, Severity, classify, explain, lint};

/// Helper to create a temporary file with given content.
fn create_test_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write to temp file");
    file
}

/// The sample table shipped in `data/`.
fn sample_table_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/sample_rules.json")
}

const ECOLI_TABLE: &str = r#"{
    "E. coli": {
        "Ampicillin": [
            {"min": 0, "max": 8, "category": "Susceptible"},
            {"min": 8.01, "max": 16, "category": "Intermediate"},
            {"min": 16.01, "max": 999, "category": "Resistant"}
        ]
    }
}"#;

fn category(name: &str) -> Classification {
    Classification::Category(name.to_string())
}

// =============================================================================
// Loading Tests
// =============================================================================

#[test]
fn test_load_from_file() {
    let file = create_test_file(ECOLI_TABLE);
    let table = RuleTable::load(file.path()).expect("Load failed");

    assert_eq!(table.organism_count(), 1);
    assert_eq!(table.pair_count(), 1);
    assert_eq!(table.rule_count(), 3);
}

#[test]
fn test_load_sample_table() {
    let table = RuleTable::load(sample_table_path()).expect("Load failed");

    let organisms: Vec<_> = table.organisms().collect();
    assert_eq!(
        organisms,
        vec![
            "Escherichia coli",
            "Staphylococcus aureus",
            "Pseudomonas aeruginosa"
        ]
    );
    assert!(lint(&table).is_empty());
}

#[test]
fn test_load_malformed_json() {
    let file = create_test_file("{ \"E. coli\": ");
    let err = RuleTable::load(file.path()).unwrap_err();
    assert!(matches!(err, BreakpointError::Json(_)));
}

#[test]
fn test_load_structurally_invalid() {
    let file = create_test_file(r#"{"E. coli": ["Ampicillin"]}"#);
    assert!(RuleTable::load(file.path()).is_err());
}

#[test]
fn test_load_missing_file() {
    let err = RuleTable::load("/definitely/not/here.json").unwrap_err();
    assert!(matches!(err, BreakpointError::Io { .. }));
}

#[test]
fn test_round_trip_preserves_order() {
    let table = RuleTable::load(sample_table_path()).expect("Load failed");
    let json = table.to_json_pretty().unwrap();
    let reloaded = RuleTable::from_json_str(&json).unwrap();

    assert_eq!(table, reloaded);
    assert_eq!(
        reloaded.antibiotics("Escherichia coli").collect::<Vec<_>>(),
        vec!["Ampicillin", "Ciprofloxacin", "Gentamicin"]
    );
}

// =============================================================================
// Classification Tests
// =============================================================================

#[test]
fn test_classify_ecoli_scenario() {
    let table = RuleTable::from_json_str(ECOLI_TABLE).unwrap();

    assert_eq!(classify(&table, "E. coli", "Ampicillin", "8"), category("Susceptible"));
    assert_eq!(classify(&table, "E. coli", "Ampicillin", "12"), category("Intermediate"));
    assert_eq!(classify(&table, "E. coli", "Ampicillin", "20"), category("Resistant"));
    assert_eq!(
        classify(&table, "E. coli", "Ampicillin", "xyz").to_string(),
        "Invalid MIC input"
    );
    assert_eq!(
        classify(&table, "Unknown Bug", "Ampicillin", "5").to_string(),
        "Value not defined by CLSI"
    );
}

#[test]
fn test_boundaries_are_inclusive() {
    let table = RuleTable::from_json_str(
        r#"{"Org": {"Ab": [{"min": 4, "max": 8, "category": "Susceptible"}]}}"#,
    )
    .unwrap();

    assert_eq!(classify(&table, "Org", "Ab", "4"), category("Susceptible"));
    assert_eq!(classify(&table, "Org", "Ab", "8"), category("Susceptible"));
    assert_eq!(classify(&table, "Org", "Ab", "3.999"), Classification::NotDefined);
    assert_eq!(classify(&table, "Org", "Ab", "8.001"), Classification::NotDefined);
}

#[test]
fn test_first_match_wins_on_overlap() {
    let table = RuleTable::from_json_str(
        r#"{"Org": {"Ab": [
            {"min": 0, "max": 10, "category": "A"},
            {"min": 5, "max": 15, "category": "B"}
        ]}}"#,
    )
    .unwrap();

    assert_eq!(classify(&table, "Org", "Ab", "7"), category("A"));
}

#[test]
fn test_inverted_rule_never_matches_but_later_rule_does() {
    let table = RuleTable::from_json_str(
        r#"{"Org": {"Ab": [
            {"min": 10, "max": 0, "category": "Broken"},
            {"min": 0, "max": 10, "category": "Fine"}
        ]}}"#,
    )
    .unwrap();

    assert_eq!(classify(&table, "Org", "Ab", "5"), category("Fine"));

    let issues = lint(&table);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].severity, Severity::Warning);
}

#[test]
fn test_organism_names_are_case_sensitive() {
    let table = RuleTable::from_json_str(ECOLI_TABLE).unwrap();
    assert_eq!(
        classify(&table, "e. coli", "Ampicillin", "4"),
        Classification::NotDefined
    );
    assert_eq!(
        classify(&table, "E. coli", "ampicillin", "4"),
        Classification::NotDefined
    );
}

#[test]
fn test_explain_agrees_with_classify_on_sample() {
    let table = RuleTable::load(sample_table_path()).expect("Load failed");

    for (organism, antibiotic, _) in table.entries() {
        for mic in ["0", "0.25", "2", "2.005", "4", "8", "16", "500", "abc", ""] {
            assert_eq!(
                explain(&table, organism, antibiotic, mic).classification,
                classify(&table, organism, antibiotic, mic),
                "{} / {} / {:?}",
                organism,
                antibiotic,
                mic
            );
        }
    }
}

#[test]
fn test_python_written_table_with_open_range() {
    // json.dump(float("inf")) writes a bare Infinity literal
    let file = create_test_file(
        r#"{"E": {"A": [
            {"min": 0, "max": 8, "category": "S"},
            {"min": 8.01, "max": Infinity, "category": "R"}
        ]}}"#,
    );
    let table = RuleTable::load(file.path()).expect("Load failed");

    assert_eq!(
        classify(&table, "E", "A", "8"),
        Classification::Category("S".into())
    );
    assert_eq!(
        classify(&table, "E", "A", "1e9"),
        Classification::Category("R".into())
    );
    assert_eq!(
        classify(&table, "E", "A", "inf"),
        Classification::Category("R".into())
    );
    assert_eq!(classify(&table, "E", "A", "-1"), Classification::NotDefined);
    assert!(lint(&table).is_empty());
}

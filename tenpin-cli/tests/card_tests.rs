use std::fs;
use tempfile::tempdir;
use tenpin_cli::commands::card::CardRow;
use tenpin_cli::commands::{card, check};
use tenpin_cli::StrategyKind;

/// Helper: write a scorecard JSON file and return its path
fn write_card(dir: &tempfile::TempDir, name: &str, records: &[Vec<&str>]) -> String {
    let path = dir.path().join(name);
    let json = serde_json::to_string(records).unwrap();
    fs::write(&path, json).unwrap();
    path.to_str().unwrap().to_string()
}

fn spare_heavy_game() -> Vec<Vec<&'static str>> {
    vec![
        vec!["0", "/"],
        vec!["1", "/"],
        vec!["2", "/"],
        vec!["3", "/"],
        vec!["4", "/"],
        vec!["5", "/"],
        vec!["6", "/"],
        vec!["7", "/"],
        vec!["8", "/"],
        vec!["0", "0"],
    ]
}

#[test]
fn test_card_renders_valid_game() {
    let td = tempdir().unwrap();
    let input = write_card(&td, "spares.json", &spare_heavy_game());

    let result = card::execute(&input, StrategyKind::Lookahead, None);

    assert!(result.is_ok());
}

#[test]
fn test_card_writes_json_report() {
    let td = tempdir().unwrap();
    let input = write_card(&td, "spares.json", &spare_heavy_game());
    let output = td.path().join("card.json");

    let result = card::execute(
        &input,
        StrategyKind::Running,
        Some(output.to_str().unwrap()),
    );

    assert!(result.is_ok());

    // The written report holds one row per frame, with the final running
    // total matching the expected score
    let json = fs::read_to_string(&output).unwrap();
    let rows: Vec<CardRow> = serde_json::from_str(&json).unwrap();

    assert_eq!(rows.len(), 10);
    assert_eq!(rows[0].marks, "- /");
    assert_eq!(rows.last().unwrap().running, 126);
}

#[test]
fn test_card_rejects_malformed_game() {
    let td = tempdir().unwrap();
    let mut records: Vec<Vec<&str>> = (0..10).map(|_| vec!["0", "0"]).collect();
    records[2] = vec!["9", "9"];
    let input = write_card(&td, "overflow.json", &records);

    let result = card::execute(&input, StrategyKind::Lookahead, None);

    assert!(result.is_err());
}

#[test]
fn test_check_valid_game() {
    let td = tempdir().unwrap();
    let input = write_card(&td, "spares.json", &spare_heavy_game());

    let result = check::execute(&input);

    assert!(result.is_ok());
}

#[test]
fn test_check_reports_malformed_game() {
    let td = tempdir().unwrap();
    let records: Vec<Vec<&str>> = (0..9).map(|_| vec!["0", "0"]).collect();
    let input = write_card(&td, "short.json", &records);

    // Findings are reported, not fatal
    let result = check::execute(&input);

    assert!(result.is_ok());
}

#[test]
fn test_check_missing_file() {
    let result = check::execute("does-not-exist.json");

    assert!(result.is_err());
}

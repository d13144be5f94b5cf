//! Integration tests for fishbone-cli
//!
//! These tests drive whole command lines against a catalog and selection on disk.

use clap::Parser;
use fishbone_cli::{execute, Cli, Config};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const CATALOG: &str = r#"{
    "man": [
        {"id": "man-001", "cause": "Kurangnya kesadaran bahaya", "priority": "Critical",
         "solutions": ["Training X", "Audit"],
         "caseExamples": ["Pekerja jatuh dari rak material"]},
        {"id": "man-003", "cause": "Pelanggaran prosedur", "priority": "Critical",
         "solutions": ["Audit", "Leadership"],
         "caseExample": "Material jatuh menimpa pekerja"}
    ],
    "method": [
        {"id": "method-001", "cause": "SOP tidak jelas", "priority": "Medium"}
    ],
    "machine": {"items": [
        {"id": "machine-001", "cause": "Guarding tidak memadai", "priority": "High"}
    ]}
}"#;

struct Workspace {
    _dir: TempDir,
    catalog: PathBuf,
    selection: PathBuf,
}

impl Workspace {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let catalog = dir.path().join("catalog.json");
        fs::write(&catalog, CATALOG).unwrap();
        let selection = dir.path().join("state").join("selection.json");
        Self {
            _dir: dir,
            catalog,
            selection,
        }
    }

    fn run(&self, args: &[&str]) -> anyhow::Result<String> {
        let mut argv = vec![
            "fishbone".to_string(),
            "--no-color".to_string(),
            "--catalog".to_string(),
            path_str(&self.catalog),
            "--selection".to_string(),
            path_str(&self.selection),
        ];
        argv.extend(args.iter().map(|s| s.to_string()));
        execute(Cli::parse_from(argv), Config::default())
    }
}

fn path_str(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

#[test]
fn test_select_then_analyze_json() {
    let ws = Workspace::new();
    ws.run(&["select", "add", "man", "man-001", "man-003"]).unwrap();
    assert!(ws.selection.exists());

    let output = ws.run(&["analyze", "--format", "json"]).unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(
        json["priority_by_category"],
        serde_json::json!({"man": {"Critical": 2, "High": 0, "Medium": 0, "Low": 0}})
    );
    assert_eq!(json["top_solutions"][0], "Audit");
    assert_eq!(
        json["relationships"],
        serde_json::json!({"man-001": ["man-003"], "man-003": ["man-001"]})
    );

    let keywords: Vec<&str> = json["case_patterns"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["keyword"].as_str().unwrap())
        .collect();
    assert_eq!(keywords, vec!["pekerja", "jatuh", "material"]);
}

#[test]
fn test_category_order_survives_reload() {
    let ws = Workspace::new();
    ws.run(&["select", "add", "method", "method-001"]).unwrap();
    ws.run(&["select", "add", "man", "man-001"]).unwrap();

    let output = ws.run(&["analyze", "--format", "json"]).unwrap();
    let start = output.find("\"priority_by_category\"").unwrap();
    let distribution = &output[start..];
    let method = distribution.find("\"method\"").unwrap();
    let man = distribution.find("\"man\"").unwrap();
    assert!(method < man, "method was selected first:\n{}", output);
}

#[test]
fn test_analyze_without_selection_fails() {
    let ws = Workspace::new();
    let err = ws.run(&["analyze"]).unwrap_err();
    assert!(err.to_string().contains("No causes selected"));
}

#[test]
fn test_missing_catalog_reports_path() {
    let argv = [
        "fishbone",
        "--catalog",
        "/nonexistent/catalog.json",
        "--selection",
        "/nonexistent/selection.json",
        "catalog",
    ];
    let err = execute(Cli::parse_from(argv), Config::default()).unwrap_err();
    assert!(format!("{:#}", err).contains("/nonexistent/catalog.json"));
}

#[test]
fn test_catalog_listing_by_category() {
    let ws = Workspace::new();
    let output = ws.run(&["catalog", "--category", "machine"]).unwrap();
    assert!(output.contains("machine-001"));
    assert!(!output.contains("man-001"));
}

#[test]
fn test_report_with_approval() {
    let ws = Workspace::new();
    ws.run(&["select", "add", "machine", "machine-001"]).unwrap();

    let output = ws
        .run(&["report", "--creator", "Sari", "--supervisor", "Budi", "--format", "json"])
        .unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json["approval"]["creator"], "Sari");
    assert_eq!(json["details"][0]["causes"][0]["description"], "No description available");
    assert_eq!(json["summary"]["critical_causes"], 0);
}

#[test]
fn test_clear_without_catalog() {
    let ws = Workspace::new();
    ws.run(&["select", "add", "man", "man-001"]).unwrap();
    fs::remove_file(&ws.catalog).unwrap();

    ws.run(&["select", "clear"]).unwrap();
    assert!(!ws.selection.exists());
}

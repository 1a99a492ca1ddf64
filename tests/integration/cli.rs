//! The binary, driven the way a shell script would drive it.

use crate::common::sample_catalog;
use std::path::Path;
use std::process::{Command, Output};

fn offerscope(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_offerscope"))
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("OFFERSCOPE_LOG")
        .output()
        .expect("failed to run offerscope")
}

fn write_catalog(dir: &Path) -> String {
    let path = dir.join("offers.json");
    std::fs::write(&path, serde_json::to_string(&sample_catalog()).unwrap()).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn test_encode_canonicalizes() {
    let output = offerscope(&["encode", "?view=grid&sort=popular&category=Design&page=1&junk=1"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "category=Design&sort=popular");
}

#[test]
fn test_search_json() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = write_catalog(dir.path());

    let output = offerscope(&["search", "-o", &catalog, "-q", "notion", "--json"]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let ids: Vec<u64> = report["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![7, 8]);
    assert_eq!(report["total_results"], 2);
    assert_eq!(report["canonical_query"], "q=notion");
}

#[test]
fn test_search_flags_override_view() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = write_catalog(dir.path());

    let output = offerscope(&[
        "search",
        "-o",
        &catalog,
        "--view",
        "category=productivity&page=3",
        "--tag",
        "Free Trial",
        "--json",
    ]);
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["total_results"], 1);
    assert_eq!(report["items"][0]["name"], "Microsoft 365");
    assert_eq!(report["page"], 1);
}

#[test]
fn test_missing_catalog_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.json");

    let output = offerscope(&["search", "-o", &missing.to_string_lossy()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("nope.json"));
}

#[test]
fn test_explain_lists_breakdown() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = write_catalog(dir.path());

    let output = offerscope(&["explain", "-o", &catalog, "-q", "figma", "-l", "1"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Figma"));
}

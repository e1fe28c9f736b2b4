//! Integration tests for the categories and preset commands

use predicates::prelude::*;

mod common;
use common::trigwords_cmd;

#[test]
fn test_categories_lists_selectors_first() {
    let output = trigwords_cmd().arg("categories").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "Initial");
    assert_eq!(lines[1], "All");
    assert_eq!(lines[2], "Pos: Quality");
    // 2 selectors + 13 categories + 7 legacy aliases
    assert_eq!(lines.len(), 22);
}

#[test]
fn test_preset_plain_listing() {
    trigwords_cmd()
        .arg("preset")
        .arg("Pos: Quality")
        .assert()
        .success()
        .stdout(predicate::str::contains("[on ] masterpiece  Pos: Quality"))
        .stdout(predicate::str::contains("[on ] score_7_up  Pos: Quality"));
}

#[test]
fn test_preset_inactive_flag() {
    trigwords_cmd()
        .arg("preset")
        .arg("Pos: Motion")
        .arg("--inactive")
        .assert()
        .success()
        .stdout(predicate::str::contains("[off] dynamic movement"));
}

#[test]
fn test_preset_json_count_for_all() {
    let output = trigwords_cmd()
        .arg("preset")
        .arg("All")
        .arg("--json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let tags: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(tags.as_array().unwrap().len(), 182);
}

#[test]
fn test_preset_json_applies_defaults() {
    let output = trigwords_cmd()
        .arg("preset")
        .arg("Pos: Motion")
        .arg("--strength")
        .arg("0.9")
        .arg("--json")
        .output()
        .unwrap();

    let stdout = String::from_utf8(output.stdout).unwrap();
    let tags: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let tags = tags.as_array().unwrap();
    assert_eq!(tags.len(), 8);
    for tag in tags {
        assert_eq!(tag["active"], true);
        assert_eq!(tag["strength"], 0.9);
        assert_eq!(tag["category"], "Pos: Motion");
        assert_eq!(tag["highlighted"], false);
    }
}

#[test]
fn test_preset_legacy_alias() {
    let via_alias = trigwords_cmd()
        .arg("preset")
        .arg("Quality")
        .arg("--json")
        .output()
        .unwrap();
    let canonical = trigwords_cmd()
        .arg("preset")
        .arg("Pos: Quality")
        .arg("--json")
        .output()
        .unwrap();
    assert_eq!(via_alias.stdout, canonical.stdout);
}

#[test]
fn test_preset_invalid_category_rejected() {
    trigwords_cmd()
        .arg("preset")
        .arg("Nonexistent")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid preset category: 'Nonexistent'"))
        .stderr(predicate::str::contains("• All"));
}

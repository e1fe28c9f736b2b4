//! Integration tests for the --catalog option

use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

mod common;
use common::trigwords_cmd;

fn write_catalog(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("catalog.toml");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_alternate_catalog_replaces_builtin() {
    let temp = TempDir::new().unwrap();
    let catalog = write_catalog(
        &temp,
        r#"
initial = ["Mood"]

[[category]]
name = "Mood"
tags = ["serene", "melancholic"]

[[category]]
name = "Texture"
tags = ["grainy"]

[aliases]
M = "Mood"
"#,
    );

    let output = trigwords_cmd()
        .arg("--catalog")
        .arg(&catalog)
        .arg("categories")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, vec!["Initial", "All", "Mood", "Texture", "M"]);
}

#[test]
fn test_render_with_alternate_catalog() {
    let temp = TempDir::new().unwrap();
    let catalog = write_catalog(
        &temp,
        r#"
initial = ["Mood"]

[[category]]
name = "Mood"
tags = ["serene", "melancholic"]
"#,
    );

    trigwords_cmd()
        .arg("--catalog")
        .arg(&catalog)
        .arg("render")
        .arg("--category")
        .arg("Initial")
        .assert()
        .success()
        .stdout(predicate::str::diff("serene, melancholic\n"));
}

#[test]
fn test_builtin_category_invalid_under_alternate_catalog() {
    let temp = TempDir::new().unwrap();
    let catalog = write_catalog(
        &temp,
        r#"
[[category]]
name = "Mood"
tags = ["serene"]
"#,
    );

    trigwords_cmd()
        .arg("--catalog")
        .arg(&catalog)
        .arg("preset")
        .arg("Pos: Quality")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid preset category"));
}

#[test]
fn test_broken_catalog_file_rejected() {
    let temp = TempDir::new().unwrap();
    let catalog = write_catalog(
        &temp,
        r#"
initial = ["Missing"]

[[category]]
name = "Mood"
tags = ["serene"]
"#,
    );

    trigwords_cmd()
        .arg("--catalog")
        .arg(&catalog)
        .arg("categories")
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains(
            "initial references unknown category: Missing",
        ));
}

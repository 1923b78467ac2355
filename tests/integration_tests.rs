//! Integration tests for the ftree CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Lay out a small project with entries the defaults should hide.
fn sample_project() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::create_dir(root.join("src")).unwrap();
    fs::write(root.join("src/main.rs"), "fn main() {}\n").unwrap();
    fs::write(root.join("README.md"), "# sample\n").unwrap();
    fs::create_dir(root.join("node_modules")).unwrap();
    fs::write(root.join("node_modules/pkg.js"), "module.exports = {}\n").unwrap();
    fs::write(root.join("debug.log"), "noise\n").unwrap();
    temp_dir
}

/// Test CLI binary exists and responds to --help
#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("ftree").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("filtered directory trees"));
}

/// Test CLI responds to --version
#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("ftree").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("ftree"));
}

/// Test invalid subcommand shows error
#[test]
fn test_invalid_subcommand() {
    let mut cmd = Command::cargo_bin("ftree").unwrap();
    cmd.arg("invalid-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

/// Default exclusions hide node_modules and *.log from the printed tree
#[test]
fn test_tree_applies_default_exclusions() {
    let project = sample_project();

    let mut cmd = Command::cargo_bin("ftree").unwrap();
    cmd.current_dir(project.path())
        .arg("tree")
        .assert()
        .success()
        .stdout(predicate::str::contains("src"))
        .stdout(predicate::str::contains("main.rs"))
        .stdout(predicate::str::contains("README.md"))
        .stdout(predicate::str::contains("node_modules").not())
        .stdout(predicate::str::contains("debug.log").not());
}

/// A root .gitignore filters entries, and --no-gitignore restores them
#[test]
fn test_tree_respects_gitignore() {
    let project = sample_project();
    fs::write(project.path().join(".gitignore"), "README.md\n").unwrap();

    let mut cmd = Command::cargo_bin("ftree").unwrap();
    cmd.current_dir(project.path())
        .arg("tree")
        .assert()
        .success()
        .stdout(predicate::str::contains("README.md").not());

    let mut cmd = Command::cargo_bin("ftree").unwrap();
    cmd.current_dir(project.path())
        .arg("tree")
        .arg("--no-gitignore")
        .assert()
        .success()
        .stdout(predicate::str::contains("README.md"));
}

/// --exclude adds patterns on top of the defaults
#[test]
fn test_tree_extra_exclusions() {
    let project = sample_project();

    let mut cmd = Command::cargo_bin("ftree").unwrap();
    cmd.current_dir(project.path())
        .arg("tree")
        .arg("--exclude")
        .arg("*.md")
        .assert()
        .success()
        .stdout(predicate::str::contains("README.md").not());
}

/// --max-depth 1 leaves directories unexpanded
#[test]
fn test_tree_depth_limit() {
    let project = sample_project();

    let mut cmd = Command::cargo_bin("ftree").unwrap();
    cmd.current_dir(project.path())
        .arg("tree")
        .arg("--max-depth")
        .arg("1")
        .assert()
        .success()
        .stdout(predicate::str::contains("src"))
        .stdout(predicate::str::contains("main.rs").not());
}

/// JSON export parses and carries the expected structure
#[test]
fn test_export_json() {
    let project = sample_project();

    let mut cmd = Command::cargo_bin("ftree").unwrap();
    let assert = cmd
        .current_dir(project.path())
        .arg("export")
        .arg("--format")
        .arg("json")
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let names: Vec<&str> = parsed
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["name"].as_str().unwrap())
        .collect();
    assert!(names.contains(&"src"));
    assert!(names.contains(&"README.md"));
    assert!(!names.contains(&"node_modules"));
}

/// Export writes the requested file
#[test]
fn test_export_to_file() {
    let project = sample_project();
    let out_path = project.path().join("TREE.md");

    let mut cmd = Command::cargo_bin("ftree").unwrap();
    cmd.current_dir(project.path())
        .arg("export")
        .arg("--format")
        .arg("markdown")
        .arg("--output")
        .arg(&out_path)
        .assert()
        .success();

    let rendered = fs::read_to_string(&out_path).unwrap();
    assert!(rendered.contains("- **src/**"));
    assert!(rendered.contains("main.rs"));
}

/// Unknown export format is rejected
#[test]
fn test_export_unknown_format() {
    let project = sample_project();

    let mut cmd = Command::cargo_bin("ftree").unwrap();
    cmd.current_dir(project.path())
        .arg("export")
        .arg("--format")
        .arg("xml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown export format"));
}

/// Stats report counts the visible entries only
#[test]
fn test_stats_json() {
    let project = sample_project();

    let mut cmd = Command::cargo_bin("ftree").unwrap();
    let assert = cmd
        .current_dir(project.path())
        .arg("stats")
        .arg("--json")
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["total_directories"], 1);
    assert_eq!(parsed["total_files"], 2);
    assert_eq!(parsed["file_types"]["rs"], 1);
    assert_eq!(parsed["file_types"]["md"], 1);
}

/// Config show emits the merged configuration as JSON
#[test]
fn test_config_show() {
    let mut cmd = Command::cargo_bin("ftree").unwrap();
    let assert = cmd.arg("config").arg("show").assert().success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["tree"]["max_depth"], 10);
}

/// A custom config file overrides the embedded defaults
#[test]
fn test_custom_config_overrides_depth() {
    let project = sample_project();
    let config_path = project.path().join("custom.toml");
    fs::write(&config_path, "[tree]\nmax_depth = 1\n").unwrap();

    let mut cmd = Command::cargo_bin("ftree").unwrap();
    cmd.current_dir(project.path())
        .arg("--config")
        .arg(&config_path)
        .arg("tree")
        .assert()
        .success()
        .stdout(predicate::str::contains("main.rs").not());
}

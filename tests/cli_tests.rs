//! Integration tests for CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const CONFIG: &str = r#"
[instance]
url = "http://127.0.0.1:9"

[[profiles]]
id = "core"
jql = "project = CORE AND type = Epic"

[profiles.components]
include = ["Docs"]
exclude = ["Legacy"]

[[profiles]]
id = "ui"
jql = "project = UI"
style = "sheets"
"#;

fn jiracsv() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("jiracsv"));
    cmd.env_remove("JIRACSV_USERNAME").env_remove("RUST_LOG");
    cmd
}

fn config_dir() -> TempDir {
    let tmp = TempDir::new().expect("tmp");
    fs::write(tmp.path().join("jiracsv.toml"), CONFIG).expect("write config");
    tmp
}

#[test]
fn test_cli_version() {
    jiracsv().arg("--version").assert().success().stdout(predicate::str::contains("jiracsv"));
}

#[test]
fn test_cli_help() {
    jiracsv()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Roll up Jira epics"))
        .stdout(predicate::str::contains("report"))
        .stdout(predicate::str::contains("profiles"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_report_help_lists_styles() {
    jiracsv()
        .args(["report", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("plain"))
        .stdout(predicate::str::contains("sheets"));
}

#[test]
fn test_report_requires_profile() {
    jiracsv().arg("report").assert().failure().stderr(predicate::str::contains("--profile"));
}

#[test]
fn test_report_without_config_fails() {
    let tmp = TempDir::new().expect("tmp");
    jiracsv()
        .current_dir(tmp.path())
        .args(["report", "-p", "core"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration file not specified"));
}

#[test]
fn test_report_unknown_profile_fails() {
    let tmp = config_dir();
    jiracsv()
        .current_dir(tmp.path())
        .args(["report", "-p", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("profile 'nope' not found"));
}

#[test]
fn test_report_rejects_invalid_style() {
    let tmp = config_dir();
    jiracsv()
        .current_dir(tmp.path())
        .args(["report", "-p", "core", "--style", "html"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'html'"))
        .stderr(predicate::str::contains("[possible values: plain, sheets]"));
}

#[test]
fn test_report_fetch_failure_writes_no_output() {
    let tmp = config_dir();
    let output = tmp.path().join("report.tsv");
    jiracsv()
        .current_dir(tmp.path())
        .args(["report", "-p", "core", "-o", output.to_str().expect("utf8 path")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed fetching epics"));
    assert!(!output.exists(), "a failed fetch must not leave a report behind");
}

#[test]
fn test_profiles_lists_config() {
    let tmp = config_dir();
    jiracsv()
        .args(["profiles", "-c", tmp.path().join("jiracsv.toml").to_str().expect("utf8 path")])
        .assert()
        .success()
        .stdout(predicate::str::contains("Instance: http://127.0.0.1:9"))
        .stdout(predicate::str::contains(
            "core [plain]: project = CORE AND type = Epic (include: Docs) (exclude: Legacy)",
        ))
        .stdout(predicate::str::contains("ui [sheets]: project = UI"));
}

#[test]
fn test_completions_for_bash() {
    jiracsv()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("jiracsv"));
}

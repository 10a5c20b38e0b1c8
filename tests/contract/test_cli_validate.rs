// Contract tests for `validate-project`

use std::fs;
use tempfile::TempDir;
use assert_cmd::Command;
use predicates::prelude::*;

fn generate(output: &std::path::Path) -> std::path::PathBuf {
    let mut cmd = Command::cargo_bin("python-project-generator").unwrap();
    cmd.args(["-n", "checked", "-d", "Checked", "-a", "Dev", "-e", "dev@example.com", "-g", "dev", "--no-git"])
        .arg("--output")
        .arg(output)
        .assert()
        .success();
    output.join("checked")
}

#[test]
fn test_generated_project_passes() {
    let temp_dir = TempDir::new().unwrap();
    let project = generate(temp_dir.path());

    let mut cmd = Command::cargo_bin("validate-project").unwrap();
    cmd.arg(&project)
        .assert()
        .success()
        .stdout(predicate::str::contains("Project validation passed!"));
}

#[test]
fn test_missing_pyproject_fails() {
    let temp_dir = TempDir::new().unwrap();
    let project = generate(temp_dir.path());
    fs::remove_file(project.join("pyproject.toml")).unwrap();

    let mut cmd = Command::cargo_bin("validate-project").unwrap();
    cmd.arg(&project)
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Missing required file: pyproject.toml"));
}

#[test]
fn test_defaults_to_current_directory() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("validate-project").unwrap();
    cmd.current_dir(temp_dir.path())
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Project validation failed:"))
        .stdout(predicate::str::contains("src/ should contain exactly one package directory"));
}

#[test]
fn test_json_report() {
    let temp_dir = TempDir::new().unwrap();
    let project = generate(temp_dir.path());
    fs::remove_dir_all(project.join(".vscode")).unwrap();

    let mut cmd = Command::cargo_bin("validate-project").unwrap();
    let output = cmd.arg(&project).arg("--json").output().unwrap();
    assert_eq!(output.status.code(), Some(1));

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["errors"][0], "Missing required directory: .vscode");
}

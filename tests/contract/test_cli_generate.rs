// Contract tests for non-interactive project generation

use std::fs;
use tempfile::TempDir;
use assert_cmd::Command;
use predicates::prelude::*;

fn generate_cmd(output: &std::path::Path, name: &str) -> Command {
    let mut cmd = Command::cargo_bin("python-project-generator").unwrap();
    cmd.args([
        "--name", name,
        "--description", "Test smoke project",
        "--author", "Test Author",
        "--email", "test@example.com",
        "--github-username", "testuser",
        "--no-git",
    ])
    .arg("--output")
    .arg(output);
    cmd
}

#[test]
fn test_generate_basic_success() {
    let temp_dir = TempDir::new().unwrap();

    generate_cmd(temp_dir.path(), "test_smoke_project")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created project test_smoke_project"));

    let project_path = temp_dir.path().join("test_smoke_project");
    assert!(project_path.is_dir(), "project directory should be created");
    assert!(project_path.join("src/test_smoke_project/main.py").is_file());
}

#[test]
fn test_generate_sanitizes_name() {
    let temp_dir = TempDir::new().unwrap();

    generate_cmd(temp_dir.path(), "My Cool-Project")
        .assert()
        .success()
        .stdout(predicate::str::contains("my_cool_project"));

    assert!(temp_dir.path().join("my_cool_project/src/my_cool_project/__init__.py").is_file());
}

#[test]
fn test_generate_existing_directory_without_force() {
    let temp_dir = TempDir::new().unwrap();
    generate_cmd(temp_dir.path(), "demo").assert().success();

    generate_cmd(temp_dir.path(), "demo")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("already exists"))
        .stderr(predicate::str::contains("--force"));
}

#[test]
fn test_generate_existing_directory_with_force() {
    let temp_dir = TempDir::new().unwrap();
    generate_cmd(temp_dir.path(), "demo").assert().success();
    let marker = temp_dir.path().join("demo/marker.txt");
    fs::write(&marker, "stale").unwrap();

    generate_cmd(temp_dir.path(), "demo")
        .arg("--force")
        .assert()
        .success();

    assert!(!marker.exists(), "force should remove previous contents");
}

#[test]
fn test_name_without_other_metadata_is_usage_error() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("python-project-generator").unwrap();
    cmd.current_dir(temp_dir.path())
        .args(["--name", "demo", "--description", "Demo"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("required"));

    assert!(!temp_dir.path().join("demo").exists());
}

#[test]
fn test_short_flags_and_default_output() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("python-project-generator").unwrap();
    cmd.current_dir(temp_dir.path())
        .args(["-n", "short", "-d", "Short", "-a", "Dev", "-e", "dev@example.com", "-g", "dev", "--no-git"])
        .assert()
        .success();

    assert!(temp_dir.path().join("short/__main__.py").is_file());
}

#[test]
fn test_json_output() {
    let temp_dir = TempDir::new().unwrap();

    let output = generate_cmd(temp_dir.path(), "json_demo")
        .arg("--json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let response: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(response["status"], "success");
    assert_eq!(response["project_name"], "json_demo");
    assert_eq!(response["git_initialized"], false);
}

#[test]
fn test_version_flag() {
    let mut cmd = Command::cargo_bin("python-project-generator").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("1.0.0"));
}

#[test]
fn test_missing_git_tool_only_warns() {
    let temp_dir = TempDir::new().unwrap();

    // an empty PATH makes `git` unresolvable
    let mut cmd = Command::cargo_bin("python-project-generator").unwrap();
    cmd.env("PATH", "")
        .args([
            "-n", "nogit", "-d", "No git", "-a", "Dev", "-e", "dev@example.com", "-g", "dev",
        ])
        .arg("--output")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Git initialization failed"));

    assert!(temp_dir.path().join("nogit/src/nogit/main.py").is_file());
}

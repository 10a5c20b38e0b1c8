use std::fs;
use std::path::{Path, PathBuf};
use crate::models::manifest::{
    ValidationReport, PACKAGE_FILES, REQUIRED_DIRS, REQUIRED_FILES, TEST_FILES,
};

/// Checks a generated project against the fixed manifest.
///
/// Every check runs; failures accumulate in the returned report.
pub fn validate_project(project_root: &Path) -> ValidationReport {
    let mut report = ValidationReport::default();

    for file in REQUIRED_FILES {
        if !project_root.join(file).exists() {
            report.push(format!("Missing required file: {file}"));
        }
    }

    for dir in REQUIRED_DIRS {
        if !project_root.join(dir).is_dir() {
            report.push(format!("Missing required directory: {dir}"));
        }
    }

    check_package(project_root, &mut report);

    let tests_dir = project_root.join("tests");
    for file in TEST_FILES {
        if !tests_dir.join(file).exists() {
            report.push(format!("Missing {file} in tests/"));
        }
    }

    report
}

fn check_package(project_root: &Path, report: &mut ValidationReport) {
    let entries: Vec<PathBuf> = fs::read_dir(project_root.join("src"))
        .map(|dir| dir.filter_map(|entry| entry.ok()).map(|entry| entry.path()).collect())
        .unwrap_or_default();

    match entries.as_slice() {
        [package_dir] if package_dir.is_dir() => {
            for file in PACKAGE_FILES {
                if !package_dir.join(file).exists() {
                    report.push(format!("Missing {} in {}", file, package_dir.display()));
                }
            }
        }
        _ => report.push("src/ should contain exactly one package directory"),
    }
}

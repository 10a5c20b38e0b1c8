use serde::{Deserialize, Serialize};

/// Files that must exist at the root of a generated project
pub const REQUIRED_FILES: &[&str] = &[
    "pyproject.toml",
    "README.md",
    "LICENSE",
    ".gitignore",
    "Makefile",
    "tox.ini",
    ".pre-commit-config.yaml",
];

/// Directories that must exist below the root of a generated project
pub const REQUIRED_DIRS: &[&str] = &[
    "src",
    "tests",
    "docs",
    "scripts",
    ".github/workflows",
    ".vscode",
];

/// Files required inside the single package directory under `src/`
pub const PACKAGE_FILES: &[&str] = &["__init__.py", "main.py"];

/// Files required inside `tests/`
pub const TEST_FILES: &[&str] = &["__init__.py", "test_main.py"];

/// Outcome of checking a tree against the manifest
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub errors: Vec<String>,
}

impl ValidationReport {
    pub fn passed(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn exit_code(&self) -> i32 {
        i32::from(!self.passed())
    }

    pub fn push(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
    }

    /// Human-readable summary, one failure per line
    pub fn render(&self) -> String {
        if self.passed() {
            return "Project validation passed!".to_string();
        }

        let mut out = String::from("Project validation failed:");
        for error in &self.errors {
            out.push_str("\n  - ");
            out.push_str(error);
        }
        out
    }
}

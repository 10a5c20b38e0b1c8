use std::fs;
use std::path::Path;
use tempfile::TempDir;
use python_project_generator::{GenerateOptions, ProjectGenerator, ProjectSpec, validate_project};

/// End-to-end generation from the bundled templates

fn generate(output: &Path) -> std::path::PathBuf {
    let spec = ProjectSpec::new(
        "comprehensive_test_project",
        "A comprehensive test project for validation",
        "Test Developer",
        "test.dev@example.com",
        "testdev",
        output,
    );
    ProjectGenerator::new(spec)
        .generate(GenerateOptions { force: false, init_git: false })
        .unwrap()
        .path
}

#[test]
fn test_project_root_structure() {
    let temp_dir = TempDir::new().unwrap();
    let project = generate(temp_dir.path());

    for item in [
        ".github",
        ".gitignore",
        ".pre-commit-config.yaml",
        ".vscode",
        "CHANGELOG.md",
        "CODE_OF_CONDUCT.md",
        "CONTRIBUTING.md",
        "LICENSE",
        "Makefile",
        "pyproject.toml",
        "README.md",
        "SECURITY.md",
        "SUPPORT.md",
        "__main__.py",
        "docs",
        "scripts",
        "src",
        "tests",
        "tox.ini",
    ] {
        assert!(project.join(item).exists(), "Expected item '{item}' not found in project root");
    }
    assert!(!project.join("md_files").exists(), "staging folder must not be copied");
}

#[test]
fn test_nested_structure() {
    let temp_dir = TempDir::new().unwrap();
    let project = generate(temp_dir.path());

    for file in [
        "src/comprehensive_test_project/__init__.py",
        "src/comprehensive_test_project/main.py",
        "tests/__init__.py",
        "tests/test_main.py",
        "docs/conf.py",
        "docs/index.rst",
        "docs/installation.rst",
        "docs/modules.rst",
        "docs/usage.rst",
        ".github/CODEOWNERS",
        ".github/PULL_REQUEST_TEMPLATE.md",
        ".vscode/extensions.json",
        ".vscode/launch.json",
        ".vscode/settings.json",
        "scripts/validate_project.py",
    ] {
        assert!(project.join(file).is_file(), "Expected file '{file}' not found");
    }
    for dir in [".github/ISSUE_TEMPLATE", ".github/actions", ".github/workflows"] {
        assert!(project.join(dir).is_dir(), "Expected directory '{dir}' not found");
    }
}

#[test]
fn test_placeholder_replacement() {
    let temp_dir = TempDir::new().unwrap();
    let project = generate(temp_dir.path());

    let pyproject = fs::read_to_string(project.join("pyproject.toml")).unwrap();
    assert!(pyproject.contains("comprehensive_test_project"));
    assert!(pyproject.contains("A comprehensive test project for validation"));
    assert!(pyproject.contains("Test Developer"));
    assert!(pyproject.contains("test.dev@example.com"));
    toml::from_str::<toml::Value>(&pyproject).unwrap();

    let readme = fs::read_to_string(project.join("README.md")).unwrap();
    assert!(readme.contains("comprehensive_test_project"));

    let init = fs::read_to_string(project.join("src/comprehensive_test_project/__init__.py")).unwrap();
    assert!(init.contains("comprehensive_test_project"));
    assert!(init.contains("__version__ = \"0.1.0\""));

    let conf = fs::read_to_string(project.join("docs/conf.py")).unwrap();
    let year = chrono::Datelike::year(&chrono::Local::now()).to_string();
    assert!(conf.contains(&format!("copyright = \"{year}, Test Developer\"")));
}

#[test]
fn test_no_tokens_left_in_text_files() {
    let temp_dir = TempDir::new().unwrap();
    let project = generate(temp_dir.path());

    for entry in walkdir::WalkDir::new(&project) {
        let entry = entry.unwrap();
        if !entry.file_type().is_file() {
            continue;
        }
        let content = fs::read_to_string(entry.path()).unwrap();
        for placeholder in python_project_generator::Placeholder::ALL {
            assert!(
                !content.contains(placeholder.token()),
                "{} still contains {}",
                entry.path().display(),
                placeholder
            );
        }
    }
}

#[test]
fn test_generated_project_validates() {
    let temp_dir = TempDir::new().unwrap();
    let project = generate(temp_dir.path());

    let report = validate_project(&project);
    assert!(report.passed(), "{:?}", report.errors);
}

#[test]
fn test_gitignore_completeness() {
    let temp_dir = TempDir::new().unwrap();
    let project = generate(temp_dir.path());

    let content = fs::read_to_string(project.join(".gitignore")).unwrap();
    for pattern in ["__pycache__", "*.py[cod]", ".tox", "htmlcov", ".coverage"] {
        assert!(content.contains(pattern), ".gitignore should contain '{pattern}'");
    }
}
